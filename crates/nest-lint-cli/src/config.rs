//! TOML configuration for the lint host.
//!
//! The rules themselves take no options; this covers host concerns only:
//! which root to scan and which paths to leave out.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Host configuration, usually loaded from `nest-lint.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Root directory to scan, resolved against the checked path when
    /// relative.
    pub root: PathBuf,

    /// Path patterns to exclude from discovery.
    pub exclude: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: vec!["node_modules".into(), "dist".into()],
        }
    }
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
}

impl LintConfig {
    /// Conventional config file name.
    pub const FILE_NAME: &'static str = "nest-lint.toml";

    /// Load from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = LintConfig::parse("").expect("parse failed");
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.exclude.iter().any(|p| p == "node_modules"));
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
root = "./src"
exclude = ["**/generated/**", "fixtures"]
"#;
        let config = LintConfig::parse(toml).expect("parse failed");
        assert_eq!(config.root, PathBuf::from("./src"));
        assert_eq!(config.exclude, vec!["**/generated/**", "fixtures"]);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = LintConfig::parse("root = [").expect_err("should fail");
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LintConfig::from_file(Path::new("/nonexistent/nest-lint.toml"))
            .expect_err("should fail");
        assert!(err.to_string().contains("failed to read"));
    }
}
