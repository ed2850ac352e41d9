//! Initializes a starter configuration file.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::LintConfig;

const TEMPLATE: &str = r#"# nest-lint configuration
root = "."
exclude = ["node_modules", "dist"]
"#;

/// Writes a starter config into the current directory.
pub fn run(force: bool) -> Result<()> {
    let target = Path::new(LintConfig::FILE_NAME);

    if target.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    std::fs::write(target, TEMPLATE)?;
    println!("Created {}", target.display());
    Ok(())
}
