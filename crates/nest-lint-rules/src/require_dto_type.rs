//! Requires DTO class types on request-bound route-handler parameters.

use nest_lint_core::{FileContext, Location, MethodRule, Violation};
use nest_lint_syntax::{MethodDecl, Param, ParamPattern, TypeExpr, TypeKeyword};
use tracing::trace;

/// Rule code for require-dto-type.
pub const CODE: &str = "NEST001";

/// Rule name for require-dto-type.
pub const NAME: &str = "require-dto-type";

/// HTTP method decorators that mark a method as a route handler.
const ROUTE_DECORATORS: [&str; 6] = ["Get", "Post", "Put", "Patch", "Delete", "Options"];

/// Decorators that bind a parameter to a piece of the request.
const BINDING_DECORATORS: [&str; 4] = ["Body", "Query", "Param", "Headers"];

const MESSAGE: &str =
    "Invalid parameter type for NestJS request decorator. Use a DTO class instead.";

/// Flags request-bound route-handler parameters whose declared type cannot
/// carry a validated payload: missing annotations, primitive scalars,
/// arrays of primitives, inline object literals, and the bare
/// `Record`/`Map`/`Object` containers.
///
/// The check is purely structural. A named reference is accepted on its
/// surface name alone and never resolved, and decorator callees only match
/// as bare identifier calls (`@Get()`, not `@nest.Get()` or `@Get`).
///
/// # Example
///
/// ```ignore
/// // BAD
/// @Get()
/// findAll(@Query() query: { page: number }) {}
///
/// // GOOD
/// @Get()
/// findAll(@Query() query: ListUsersDto) {}
/// ```
pub struct RequireDtoType;

impl RequireDtoType {
    /// Creates a new require-dto-type rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequireDtoType {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodRule for RequireDtoType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Request-bound handler parameters must be typed with a DTO class"
    }

    fn check_method(&self, ctx: &FileContext, method: &MethodDecl) -> Vec<Violation> {
        if !is_route_handler(method) {
            return Vec::new();
        }

        let mut violations = Vec::new();
        for param in &method.params {
            match &param.pattern {
                ParamPattern::Ident { .. } => {}
                // Destructuring, rest, and `this` bindings cannot carry
                // the decorators this rule cares about.
                ParamPattern::Object
                | ParamPattern::Array
                | ParamPattern::Rest
                | ParamPattern::This => continue,
            }

            if !is_request_bound(param) {
                continue;
            }

            if !is_valid_dto_type(param.ty.as_ref()) {
                trace!(method = %method.name, "invalid request-bound parameter type");
                violations.push(Violation::new(
                    CODE,
                    NAME,
                    self.default_severity(),
                    Location::from_span(ctx.relative_path.clone(), &param.span),
                    MESSAGE,
                ));
            }
        }

        violations
    }
}

fn is_route_handler(method: &MethodDecl) -> bool {
    method.decorators.iter().any(|d| {
        d.bare_call_name()
            .is_some_and(|name| ROUTE_DECORATORS.contains(&name))
    })
}

fn is_request_bound(param: &Param) -> bool {
    param.decorators.iter().any(|d| {
        d.bare_call_name()
            .is_some_and(|name| BINDING_DECORATORS.contains(&name))
    })
}

/// Whether the declared type can serve as a validated request payload.
fn is_valid_dto_type(ty: Option<&TypeExpr>) -> bool {
    let Some(ty) = ty else {
        return false;
    };

    match ty {
        TypeExpr::Keyword(keyword) => !matches!(
            keyword,
            TypeKeyword::String
                | TypeKeyword::Number
                | TypeKeyword::Boolean
                | TypeKeyword::Any
                | TypeKeyword::Unknown
        ),
        TypeExpr::ObjectLiteral => false,
        TypeExpr::Array(element) => !matches!(
            element.as_ref(),
            TypeExpr::Keyword(TypeKeyword::String | TypeKeyword::Number | TypeKeyword::Boolean)
        ),
        TypeExpr::Named { name } => !matches!(name.as_str(), "Record" | "Map" | "Object"),
        // Qualified references and unrecognized shapes are out of scope
        // for a surface-name check.
        TypeExpr::Qualified { .. } | TypeExpr::Other => true,
    }
}
