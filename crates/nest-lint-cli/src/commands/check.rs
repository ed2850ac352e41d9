//! Check command.
//!
//! Discovers TypeScript sources under the target path, runs the default
//! rule set over each file, and reports the collected violations.

use anyhow::{Context, Result};
use nest_lint_core::{LintResult, Linter};
use nest_lint_rules::default_rules;
use nest_lint_syntax::EXTENSIONS;
use std::path::{Path, PathBuf};

use crate::config::LintConfig;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    cli_excludes: &[String],
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(path, config_path)?;

    let mut exclude = config.exclude.clone();
    exclude.extend(cli_excludes.iter().cloned());

    let root = if config.root.is_absolute() {
        config.root.clone()
    } else {
        path.join(&config.root)
    };

    let result = lint_path(&root, &exclude)?;
    super::output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Lints every TypeScript file under `root`, honoring exclude patterns.
///
/// Files that cannot be read or parsed are reported and skipped; they
/// never abort the run.
fn lint_path(root: &Path, exclude: &[String]) -> Result<LintResult> {
    let linter = Linter::new().with_rules(default_rules());
    let files = discover_files(root, exclude)?;

    tracing::info!("Analyzing {} files", files.len());

    let mut result = LintResult::new();

    for file_path in &files {
        let source = match std::fs::read_to_string(file_path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", file_path.display());
                continue;
            }
        };

        match linter.check_source(file_path, root, &source) {
            Ok(file_result) => result.extend(file_result),
            Err(e) => tracing::warn!("Skipping {}: {e}", file_path.display()),
        }
    }

    // Sort by file, then line
    result.violations.sort_by(|a, b| {
        a.location
            .file
            .cmp(&b.location.file)
            .then(a.location.line.cmp(&b.location.line))
    });

    Ok(result)
}

fn load_config(path: &Path, explicit: Option<&Path>) -> Result<LintConfig> {
    if let Some(p) = explicit {
        return LintConfig::from_file(p).with_context(|| format!("Failed to load {}", p.display()));
    }

    let local = path.join(LintConfig::FILE_NAME);
    if local.is_file() {
        tracing::debug!("Using config: {}", local.display());
        return LintConfig::from_file(&local)
            .with_context(|| format!("Failed to load {}", local.display()));
    }

    Ok(LintConfig::default())
}

fn discover_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        if !EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        let excluded = exclude.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        });

        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAD_CONTROLLER: &str = "class UserController {\n  @Get()\n  findAll(@Query() q: string) {}\n}\n";
    const GOOD_CONTROLLER: &str = "class UserController {\n  @Get()\n  findAll(@Query() q: ListUsersDto) {}\n}\n";

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("mkdir");
        }
        std::fs::write(path, content).expect("write");
    }

    #[test]
    fn lints_discovered_typescript_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "user.controller.ts", BAD_CONTROLLER);
        write(dir.path(), "ok.controller.ts", GOOD_CONTROLLER);

        let result = lint_path(dir.path(), &[]).expect("lint");
        assert_eq!(result.files_checked, 2);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(
            result.violations[0].location.file,
            PathBuf::from("user.controller.ts")
        );
    }

    #[test]
    fn non_typescript_files_are_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "notes.md", "@Get() not code");
        write(dir.path(), "main.rs", "fn main() {}");

        let result = lint_path(dir.path(), &[]).expect("lint");
        assert_eq!(result.files_checked, 0);
    }

    #[test]
    fn exclude_patterns_skip_matching_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "src/user.controller.ts", BAD_CONTROLLER);
        write(dir.path(), "generated/user.controller.ts", BAD_CONTROLLER);

        let result = lint_path(dir.path(), &["generated".into()]).expect("lint");
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");
        assert!(lint_path(&missing, &[]).is_err());
    }

    #[test]
    fn violations_are_sorted_by_file_then_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            dir.path(),
            "b.controller.ts",
            "class B {\n  @Get()\n  one(@Query() a: string) {}\n  @Post()\n  two(@Body() b: any) {}\n}\n",
        );
        write(dir.path(), "a.controller.ts", BAD_CONTROLLER);

        let result = lint_path(dir.path(), &[]).expect("lint");
        assert_eq!(result.violations.len(), 3);
        assert_eq!(
            result.violations[0].location.file,
            PathBuf::from("a.controller.ts")
        );
        assert_eq!(
            result.violations[1].location.file,
            PathBuf::from("b.controller.ts")
        );
        assert!(result.violations[1].location.line < result.violations[2].location.line);
    }
}
