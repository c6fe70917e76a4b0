//! Adapter interfaces for external collaborators.
//!
//! The only external system the generator consults is the source-history
//! tool (git). It sits behind the `HistorySource` trait so the pipeline
//! can run against a fixed clock in tests.

pub mod git;

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

pub use git::GitHistory;

/// Source-history lookup used for version derivation
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Unix timestamp of the most recent recorded change under `path`,
    /// or `None` when the path has no history
    async fn last_modified(&self, path: &Path) -> Result<Option<i64>>;
}
