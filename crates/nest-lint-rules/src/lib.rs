//! # nest-lint-rules
//!
//! Built-in lint rules for nest-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | NEST001 | `require-dto-type` | Request-bound handler parameters must be typed with a DTO class |
//!
//! ## Usage
//!
//! ```ignore
//! use nest_lint_core::Linter;
//! use nest_lint_rules::RequireDtoType;
//!
//! let linter = Linter::new().with_rule(RequireDtoType::new());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod require_dto_type;

pub use require_dto_type::RequireDtoType;

/// Re-export core types for convenience.
pub use nest_lint_core::{MethodRule, MethodRuleBox, Severity, Violation};

/// The default rule set, boxed for registration with a linter.
#[must_use]
pub fn default_rules() -> Vec<MethodRuleBox> {
    vec![Box::new(RequireDtoType::new())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_contains_require_dto_type() {
        let rules = default_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].code(), "NEST001");
        assert_eq!(rules[0].name(), "require-dto-type");
    }
}
