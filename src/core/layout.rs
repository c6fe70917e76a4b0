//! Plugin tree shaping.
//!
//! Copies a skill's file tree into the distributable plugin layout. The
//! declaration file and reference material land under an inner `skills/`
//! directory; every other top-level entry is copied as-is to the plugin
//! root. Directory copies merge into any existing destination.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use filetime::FileTime;
use tokio::fs;

use crate::domain::skill::DECLARATION_FILE;

/// Reference material that travels with the declaration file
pub const REFERENCES_DIR: &str = "references";

/// Inner directory receiving the allow-listed entries
pub const SKILLS_SUBDIR: &str = "skills";

/// Destination of a top-level skill entry, relative to the plugin root
pub fn destination_for(entry_name: &str) -> PathBuf {
    if entry_name == DECLARATION_FILE || entry_name == REFERENCES_DIR {
        Path::new(SKILLS_SUBDIR).join(entry_name)
    } else {
        PathBuf::from(entry_name)
    }
}

/// Copy one file, preserving its modification time
async fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::copy(src, dst)
        .await
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;

    let metadata = fs::metadata(src)
        .await
        .with_context(|| format!("Failed to stat {}", src.display()))?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dst, mtime)
        .with_context(|| format!("Failed to set mtime on {}", dst.display()))?;

    Ok(())
}

/// Recursively copy a directory, merging into any existing destination.
///
/// Files already present at the destination are overwritten; entries that
/// exist only at the destination are left alone.
pub async fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    let mut pending = vec![(src.to_path_buf(), dst.to_path_buf())];

    while let Some((from, to)) = pending.pop() {
        fs::create_dir_all(&to)
            .await
            .with_context(|| format!("Failed to create {}", to.display()))?;

        let mut entries = fs::read_dir(&from)
            .await
            .with_context(|| format!("Failed to read {}", from.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let from_path = entry.path();
            let to_path = to.join(entry.file_name());

            if entry.file_type().await?.is_dir() {
                pending.push((from_path, to_path));
            } else {
                copy_file(&from_path, &to_path).await?;
            }
        }
    }

    Ok(())
}

/// Materialize one skill into its plugin directory
pub async fn stage_skill(skill_dir: &Path, plugin_dir: &Path) -> Result<()> {
    let mut entries = fs::read_dir(skill_dir)
        .await
        .with_context(|| format!("Failed to read skill directory {}", skill_dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let dest = plugin_dir.join(destination_for(&name.to_string_lossy()));

        if entry.file_type().await?.is_dir() {
            copy_tree(&entry.path(), &dest).await?;
        } else {
            copy_file(&entry.path(), &dest).await?;
        }
    }

    Ok(())
}
