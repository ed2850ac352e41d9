//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to method rules about the file under analysis.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root, used to anchor violations.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_is_stripped_from_root() {
        let ctx = FileContext::new(
            Path::new("/work/api/src/user.controller.ts"),
            "",
            Path::new("/work/api"),
        );
        assert_eq!(
            ctx.relative_path,
            PathBuf::from("src/user.controller.ts")
        );
    }

    #[test]
    fn path_outside_root_is_kept_as_is() {
        let ctx = FileContext::new(
            Path::new("/elsewhere/app.controller.ts"),
            "",
            Path::new("/work/api"),
        );
        assert_eq!(
            ctx.relative_path,
            PathBuf::from("/elsewhere/app.controller.ts")
        );
    }
}
