//! Rule trait for defining method-level lint rules.

use crate::context::FileContext;
use crate::types::{Severity, Violation};
use nest_lint_syntax::MethodDecl;

/// A lint rule evaluated once per method declaration.
///
/// The driver owns tree traversal; rules are pure callbacks over the typed
/// method view and hold no state across invocations, so methods may be
/// checked in any order.
///
/// # Example
///
/// ```ignore
/// use nest_lint_core::{FileContext, Location, MethodRule, Violation};
/// use nest_lint_syntax::MethodDecl;
///
/// pub struct NoEmptyHandlers;
///
/// impl MethodRule for NoEmptyHandlers {
///     fn name(&self) -> &'static str { "no-empty-handlers" }
///     fn code(&self) -> &'static str { "NEST999" }
///
///     fn check_method(&self, ctx: &FileContext, method: &MethodDecl) -> Vec<Violation> {
///         // inspect `method`, anchor violations with ctx.relative_path
///         Vec::new()
///     }
/// }
/// ```
pub trait MethodRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "require-dto-type").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "NEST001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single method declaration and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `method` - The extracted method declaration view
    fn check_method(&self, ctx: &FileContext, method: &MethodDecl) -> Vec<Violation>;
}

/// Type alias for boxed `MethodRule` trait objects.
pub type MethodRuleBox = Box<dyn MethodRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestRule;

    impl MethodRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check_method(&self, ctx: &FileContext, method: &MethodDecl) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::from_span(ctx.relative_path.clone(), &method.span),
                "Test violation",
            )]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
    }
}
