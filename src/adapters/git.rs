//! Git-backed source history.
//!
//! Queries the `git` CLI in subprocess mode for the last commit timestamp
//! of a path. A path outside any repository, or one with no commits yet,
//! counts as having no history rather than as an error.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;

use super::HistorySource;

/// History source backed by the `git` CLI
pub struct GitHistory {
    /// Path to the git binary (default: "git")
    binary_path: String,
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHistory {
    /// Create a git history source with the default binary path
    pub fn new() -> Self {
        Self {
            binary_path: "git".to_string(),
        }
    }

    /// Create a git history source with a custom binary path
    pub fn with_binary_path(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }
}

#[async_trait]
impl HistorySource for GitHistory {
    async fn last_modified(&self, path: &Path) -> Result<Option<i64>> {
        let output = match Command::new(&self.binary_path)
            .args(["log", "-1", "--format=%ct", "--"])
            .arg(path)
            .output()
            .await
        {
            Ok(output) => output,
            // A missing git binary counts as no history
            Err(_) => return Ok(None),
        };

        if !output.status.success() {
            return Ok(None);
        }

        let stdout =
            String::from_utf8(output.stdout).context("git log output is not valid UTF-8")?;
        let stdout = stdout.trim();
        if stdout.is_empty() {
            return Ok(None);
        }

        let timestamp = stdout
            .parse::<i64>()
            .with_context(|| format!("Unexpected git timestamp output: {}", stdout))?;

        Ok(Some(timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_custom_binary_path() {
        let history = GitHistory::with_binary_path("/custom/path/git");
        assert_eq!(history.binary_path, "/custom/path/git");
    }

    #[tokio::test]
    async fn test_missing_binary_means_no_history() {
        let temp = TempDir::new().unwrap();
        let history = GitHistory::with_binary_path("/nonexistent/git-binary");

        let result = history.last_modified(temp.path()).await.unwrap();
        assert_eq!(result, None);
    }

    // Tests against a real repository would go in tests/
}
