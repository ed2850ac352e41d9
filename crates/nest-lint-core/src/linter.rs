//! Per-file lint driver.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::context::FileContext;
use crate::rule::{MethodRule, MethodRuleBox};
use crate::types::LintResult;
use nest_lint_syntax::{ParseError, SourceParser};

/// Errors that can occur while linting a source buffer.
#[derive(Debug, Error)]
pub enum LintError {
    /// The frontend failed to produce a syntax tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Drives registered rules over the method declarations of one file at a
/// time.
///
/// The linter is stateless across files: each call parses the given buffer,
/// dispatches every extracted method to every rule, and returns the
/// collected violations. File discovery belongs to the caller.
pub struct Linter {
    parser: SourceParser,
    rules: Vec<MethodRuleBox>,
}

impl Linter {
    /// Creates a linter with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: SourceParser::new(),
            rules: Vec::new(),
        }
    }

    /// Registers a rule.
    #[must_use]
    pub fn with_rule<R: MethodRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers multiple boxed rules.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = MethodRuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Lints a single source buffer.
    ///
    /// # Errors
    ///
    /// Returns an error only when the frontend cannot produce a tree at
    /// all; files with syntax errors are still linted over whatever was
    /// extractable.
    pub fn check_source(
        &self,
        path: &Path,
        root: &Path,
        source: &str,
    ) -> Result<LintResult, LintError> {
        let file = self.parser.parse(source)?;
        let ctx = FileContext::new(path, source, root);

        let mut result = LintResult::new();
        result.files_checked = 1;

        for method in &file.methods {
            for rule in &self.rules {
                result.violations.extend(rule.check_method(&ctx, method));
            }
        }

        debug!(
            file = %ctx.relative_path.display(),
            methods = file.methods.len(),
            violations = result.violations.len(),
            "checked file"
        );

        Ok(result)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Severity, Violation};
    use nest_lint_syntax::MethodDecl;

    struct FlagEveryMethod;

    impl MethodRule for FlagEveryMethod {
        fn name(&self) -> &'static str {
            "flag-every-method"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn check_method(&self, ctx: &FileContext, method: &MethodDecl) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                Severity::Error,
                Location::from_span(ctx.relative_path.clone(), &method.span),
                format!("method {}", method.name),
            )]
        }
    }

    const SOURCE: &str = "class C {\n  one() {}\n  two() {}\n}\n";

    fn linter() -> Linter {
        Linter::new().with_rule(FlagEveryMethod)
    }

    #[test]
    fn dispatches_every_method_to_rules() {
        let result = linter()
            .check_source(Path::new("/p/c.ts"), Path::new("/p"), SOURCE)
            .expect("lint");
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 2);
        assert!(result.violations[0].message.contains("one"));
        assert!(result.violations[1].message.contains("two"));
    }

    #[test]
    fn no_rules_means_no_violations() {
        let result = Linter::new()
            .check_source(Path::new("/p/c.ts"), Path::new("/p"), SOURCE)
            .expect("lint");
        assert!(result.violations.is_empty());
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let linter = linter();
        let first = linter
            .check_source(Path::new("/p/c.ts"), Path::new("/p"), SOURCE)
            .expect("lint");
        let second = linter
            .check_source(Path::new("/p/c.ts"), Path::new("/p"), SOURCE)
            .expect("lint");

        let key = |r: &LintResult| {
            r.violations
                .iter()
                .map(|v| (v.code.clone(), v.location.line, v.message.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(key(&first), key(&second));
    }

    #[test]
    fn violations_anchor_at_relative_paths() {
        let result = linter()
            .check_source(Path::new("/p/src/c.ts"), Path::new("/p"), SOURCE)
            .expect("lint");
        assert_eq!(
            result.violations[0].location.file,
            std::path::PathBuf::from("src/c.ts")
        );
    }
}
