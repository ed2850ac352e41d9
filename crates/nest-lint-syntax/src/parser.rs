//! TypeScript parsing and lowering using Tree-sitter.

use tree_sitter::{Language, Node, Parser};

use crate::ast::{
    Decorator, DecoratorForm, MethodDecl, Param, ParamPattern, Span, TypeExpr, TypeKeyword,
};

/// File extensions this frontend handles.
pub const EXTENSIONS: &[&str] = &[".ts", ".mts", ".cts"];

/// Errors when parsing a source buffer.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The runtime rejected the compiled grammar.
    #[error("failed to load TypeScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser produced no tree.
    #[error("tree-sitter produced no syntax tree")]
    NoTree,
}

/// Result of parsing a single source file.
///
/// Syntax errors do not fail the parse: tree-sitter recovers and the
/// well-formed method declarations are still extracted.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// All method declarations found, in source order.
    pub methods: Vec<MethodDecl>,
}

/// Parses TypeScript source into [`SourceFile`] views.
pub struct SourceParser {
    language: Language,
}

impl SourceParser {
    /// Creates a parser for the TypeScript grammar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Parses source text and extracts every method declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser
    /// yields no tree. Malformed source is not an error.
    pub fn parse(&self, source: &str) -> Result<SourceFile, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ParseError::NoTree)?;

        let mut methods = Vec::new();
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            if node.kind() == "method_definition" {
                methods.push(extract_method(&node, src));
            }
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }

        Ok(SourceFile { methods })
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
}

fn span_of(node: &Node<'_>) -> Span {
    let start = node.start_position();
    Span {
        line: start.row + 1,
        column: start.column,
        offset: node.start_byte(),
        length: node.end_byte() - node.start_byte(),
    }
}

fn extract_method(node: &Node<'_>, src: &[u8]) -> MethodDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| text(&n, src).to_owned())
        .unwrap_or_default();

    let params = node
        .child_by_field_name("parameters")
        .map(|list| extract_params(&list, src))
        .unwrap_or_default();

    MethodDecl {
        name,
        span: span_of(node),
        decorators: attached_decorators(node, src),
        params,
    }
}

/// Collects a method's decorators.
///
/// Depending on grammar version, decorators in a class body are attached
/// either as children of the `method_definition` node or as its preceding
/// siblings. Both placements are read; a given tree only ever uses one.
fn attached_decorators(node: &Node<'_>, src: &[u8]) -> Vec<Decorator> {
    let mut decorators = Vec::new();

    let mut prev = node.prev_named_sibling();
    while let Some(sibling) = prev {
        match sibling.kind() {
            "decorator" => decorators.push(extract_decorator(&sibling, src)),
            "comment" => {}
            _ => break,
        }
        prev = sibling.prev_named_sibling();
    }
    decorators.reverse();

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "decorator" {
            decorators.push(extract_decorator(&child, src));
        }
    }

    decorators
}

fn extract_decorator(node: &Node<'_>, src: &[u8]) -> Decorator {
    let form = match node.named_child(0) {
        Some(expr) => match expr.kind() {
            "call_expression" => call_form(&expr, src),
            "identifier" => DecoratorForm::Reference {
                name: text(&expr, src).to_owned(),
            },
            _ => DecoratorForm::Other,
        },
        None => DecoratorForm::Other,
    };

    Decorator {
        span: span_of(node),
        form,
    }
}

fn call_form(call: &Node<'_>, src: &[u8]) -> DecoratorForm {
    match call.child_by_field_name("function") {
        Some(callee) if callee.kind() == "identifier" => DecoratorForm::Call {
            name: text(&callee, src).to_owned(),
        },
        Some(callee) if callee.kind() == "member_expression" => {
            let name = callee
                .child_by_field_name("property")
                .map(|p| text(&p, src).to_owned())
                .unwrap_or_default();
            DecoratorForm::QualifiedCall { name }
        }
        _ => DecoratorForm::Other,
    }
}

fn extract_params(list: &Node<'_>, src: &[u8]) -> Vec<Param> {
    let mut params = Vec::new();
    let mut cursor = list.walk();
    for child in list.named_children(&mut cursor) {
        match child.kind() {
            "required_parameter" | "optional_parameter" => {
                if let Some(param) = extract_param(&child, src) {
                    params.push(param);
                }
            }
            // Bare identifier without the TS parameter wrapper (plain JS
            // method shapes surfaced through error recovery).
            "identifier" => params.push(Param {
                span: span_of(&child),
                pattern: ParamPattern::Ident {
                    name: text(&child, src).to_owned(),
                    has_default: false,
                },
                decorators: Vec::new(),
                ty: None,
            }),
            _ => {}
        }
    }
    params
}

fn extract_param(node: &Node<'_>, src: &[u8]) -> Option<Param> {
    let mut decorators = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "decorator" {
            decorators.push(extract_decorator(&child, src));
        }
    }

    let binding = node
        .child_by_field_name("pattern")
        .or_else(|| first_binding_child(node))?;

    let has_default = node.child_by_field_name("value").is_some();
    let pattern = match binding.kind() {
        "identifier" => ParamPattern::Ident {
            name: text(&binding, src).to_owned(),
            has_default,
        },
        "object_pattern" => ParamPattern::Object,
        "array_pattern" => ParamPattern::Array,
        "rest_pattern" => ParamPattern::Rest,
        "this" => ParamPattern::This,
        _ => return None,
    };

    let ty = node
        .child_by_field_name("type")
        .and_then(|ann| ann.named_child(0))
        .map(|ty| lower_type(&ty, src));

    Some(Param {
        span: span_of(node),
        pattern,
        decorators,
        ty,
    })
}

/// Fallback binding lookup for trees that omit the `pattern` field.
fn first_binding_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|child| {
        matches!(
            child.kind(),
            "identifier" | "object_pattern" | "array_pattern" | "rest_pattern" | "this"
        )
    });
    found
}

fn lower_type(node: &Node<'_>, src: &[u8]) -> TypeExpr {
    match node.kind() {
        "predefined_type" => {
            TypeKeyword::from_source(text(node, src)).map_or(TypeExpr::Other, TypeExpr::Keyword)
        }
        "object_type" => TypeExpr::ObjectLiteral,
        "array_type" => {
            let element = node
                .named_child(0)
                .map_or(TypeExpr::Other, |e| lower_type(&e, src));
            TypeExpr::Array(Box::new(element))
        }
        "type_identifier" => TypeExpr::Named {
            name: text(node, src).to_owned(),
        },
        "nested_type_identifier" => TypeExpr::Qualified {
            name: simple_name(node, src),
        },
        "generic_type" => match node.child_by_field_name("name") {
            Some(n) if n.kind() == "type_identifier" => TypeExpr::Named {
                name: text(&n, src).to_owned(),
            },
            Some(n) if n.kind() == "nested_type_identifier" => TypeExpr::Qualified {
                name: simple_name(&n, src),
            },
            _ => TypeExpr::Other,
        },
        _ => TypeExpr::Other,
    }
}

fn simple_name(nested: &Node<'_>, src: &[u8]) -> String {
    nested
        .child_by_field_name("name")
        .map(|n| text(&n, src).to_owned())
        .unwrap_or_default()
}
