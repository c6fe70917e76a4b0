//! Workspace paths for the generator.
//!
//! All artifact locations derive from a single workspace root, resolved
//! (highest priority first) from the `--root` flag, the `SKILLPACK_ROOT`
//! environment variable, or the current directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Source root scanned for skills
pub const SKILLS_DIR: &str = "skills";

/// Output root receiving generated plugins
pub const PLUGINS_DIR: &str = "plugins";

/// Directory name used for the per-plugin manifest and, at the workspace
/// root, for the aggregate catalog
pub const CLAUDE_PLUGIN_DIR: &str = ".claude-plugin";

/// Aggregate catalog file name
pub const CATALOG_FILE: &str = "marketplace.json";

/// Resolved workspace paths
#[derive(Debug, Clone)]
pub struct Paths {
    /// Workspace root holding `skills/` and receiving `plugins/`
    pub root: PathBuf,
}

impl Paths {
    /// Create paths rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve paths from the current directory
    pub fn from_current_dir() -> Result<Self> {
        let root = std::env::current_dir().context("Failed to determine current directory")?;
        Ok(Self::new(root))
    }

    /// Skill source root
    pub fn skills_dir(&self) -> PathBuf {
        self.root.join(SKILLS_DIR)
    }

    /// Plugin output root
    pub fn plugins_dir(&self) -> PathBuf {
        self.root.join(PLUGINS_DIR)
    }

    /// Aggregate catalog location (beside the output root, not inside it)
    pub fn catalog_file(&self) -> PathBuf {
        self.root.join(CLAUDE_PLUGIN_DIR).join(CATALOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_paths_derive_from_root() {
        let paths = Paths::new("/workspace");

        assert_eq!(paths.skills_dir(), Path::new("/workspace/skills"));
        assert_eq!(paths.plugins_dir(), Path::new("/workspace/plugins"));
        assert_eq!(
            paths.catalog_file(),
            Path::new("/workspace/.claude-plugin/marketplace.json")
        );
    }
}
