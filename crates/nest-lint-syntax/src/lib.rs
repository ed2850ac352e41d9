//! # nest-lint-syntax
//!
//! Tree-sitter based TypeScript frontend for nest-lint.
//!
//! This crate owns all tree-sitter interaction. It parses TypeScript source
//! and lowers the syntax tree into closed, typed views of the shapes the
//! lint rules inspect:
//!
//! - [`MethodDecl`] for class method declarations and their decorators
//! - [`Param`] / [`ParamPattern`] for formal parameters
//! - [`TypeExpr`] / [`TypeKeyword`] for declared parameter types
//! - [`SourceParser`] for turning source text into a [`SourceFile`]
//!
//! Rules match exhaustively on these views; unrecognized node shapes lower
//! to explicit `Other` variants instead of surfacing raw nodes upward.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
pub mod parser;

pub use ast::{
    Decorator, DecoratorForm, MethodDecl, Param, ParamPattern, Span, TypeExpr, TypeKeyword,
};
pub use parser::{ParseError, SourceFile, SourceParser, EXTENSIONS};
