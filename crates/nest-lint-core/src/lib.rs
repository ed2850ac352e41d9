//! # nest-lint-core
//!
//! Core framework for linting NestJS controllers over the tree-sitter
//! based TypeScript frontend.
//!
//! This crate provides the foundational traits and types for building
//! method-level lint rules. It includes:
//!
//! - [`MethodRule`] trait for per-method rules
//! - [`Linter`] for dispatching rules over a parsed file
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use nest_lint_core::Linter;
//!
//! let linter = Linter::new().with_rule(MyRule::new());
//! let result = linter.check_source(path, root, &source)?;
//! assert!(!result.has_errors());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod linter;
mod rule;
mod types;

pub use context::FileContext;
pub use linter::{LintError, Linter};
pub use rule::{MethodRule, MethodRuleBox};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
