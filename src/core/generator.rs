//! Marketplace generation orchestrator.
//!
//! Coordinates the full run: clear the output root, discover skills in
//! lexicographic order, run the per-skill pipeline (header extraction,
//! version resolution, tree staging, manifest and README synthesis), and
//! write the aggregate catalog. Any per-skill failure aborts the whole
//! run so the published catalog is never observed half-written.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::fs;
use tracing::{info, warn};

use crate::adapters::{GitHistory, HistorySource};
use crate::config::Paths;
use crate::domain::catalog::{category_for, Marketplace, MarketplaceEntry};
use crate::domain::manifest::{self, version_from_key, PluginManifest};
use crate::domain::skill::{Skill, SkillHeader, DECLARATION_FILE};

use super::layout;

/// Marketplace generator
pub struct Generator {
    paths: Paths,
    history: Box<dyn HistorySource>,
}

impl Generator {
    /// Create a generator backed by git history
    pub fn new(paths: Paths) -> Self {
        Self::with_history(paths, Box::new(GitHistory::new()))
    }

    /// Create a generator with a custom history source
    pub fn with_history(paths: Paths, history: Box<dyn HistorySource>) -> Self {
        Self { paths, history }
    }

    /// Run the full generation pipeline
    pub async fn generate(&self) -> Result<Marketplace> {
        self.clear_output().await?;

        let mut marketplace = Marketplace::new();

        for skill_dir in self.discover_skills().await? {
            let entry = self
                .package_skill(&skill_dir)
                .await
                .with_context(|| format!("Failed to package skill at {}", skill_dir.display()))?;

            info!("Generated plugin: {}", entry.name);
            marketplace.add(entry);
        }

        self.write_catalog(&marketplace).await?;

        info!("Generated {} plugins", marketplace.len());
        info!("Generated {}", self.paths.catalog_file().display());

        Ok(marketplace)
    }

    /// Remove the output root and recreate it empty, so plugins of skills
    /// removed from source never survive a run
    async fn clear_output(&self) -> Result<()> {
        let output = self.paths.plugins_dir();

        if output.exists() {
            fs::remove_dir_all(&output)
                .await
                .with_context(|| format!("Failed to clear output root {}", output.display()))?;
        }

        fs::create_dir_all(&output)
            .await
            .with_context(|| format!("Failed to create output root {}", output.display()))?;

        Ok(())
    }

    /// Enumerate qualifying skill directories in lexicographic order.
    ///
    /// Hidden entries and directories without a declaration file are
    /// skipped silently.
    async fn discover_skills(&self) -> Result<Vec<PathBuf>> {
        let source = self.paths.skills_dir();

        let mut entries = fs::read_dir(&source)
            .await
            .with_context(|| format!("Failed to read source root {}", source.display()))?;

        let mut dirs = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if !path.join(DECLARATION_FILE).exists() {
                continue;
            }

            dirs.push(path);
        }

        dirs.sort();
        Ok(dirs)
    }

    /// Run the per-skill pipeline and produce its catalog entry
    async fn package_skill(&self, skill_dir: &Path) -> Result<MarketplaceEntry> {
        let declaration = skill_dir.join(DECLARATION_FILE);
        let content = fs::read_to_string(&declaration)
            .await
            .with_context(|| format!("Failed to read {}", declaration.display()))?;

        let header = SkillHeader::extract(&content)?;
        let skill = Skill::resolve(skill_dir, header);

        if skill.description.is_none() {
            warn!("{} has no description", skill.name);
        }
        let description = skill.description_or_placeholder();

        let version = self.resolve_version(skill_dir).await?;

        // create_dir (not create_dir_all): two skills declaring the same
        // published name must fail the run, not silently merge
        let plugin_dir = self.paths.plugins_dir().join(&skill.name);
        fs::create_dir(&plugin_dir)
            .await
            .with_context(|| format!("Failed to create plugin directory {}", plugin_dir.display()))?;

        layout::stage_skill(skill_dir, &plugin_dir).await?;

        let plugin_manifest = PluginManifest::new(&skill.name, &description, &version);
        plugin_manifest.write(&plugin_dir).await?;
        manifest::write_readme(&plugin_dir, &skill.name, &description).await?;

        Ok(MarketplaceEntry {
            source: MarketplaceEntry::source_path(&skill.name),
            category: category_for(&skill.name),
            name: skill.name,
            description,
            version,
        })
    }

    /// Version for a skill: `0.1.<timestamp>` from history, wall clock
    /// when the path has none
    async fn resolve_version(&self, skill_dir: &Path) -> Result<String> {
        let key = match self.history.last_modified(skill_dir).await? {
            Some(timestamp) => timestamp,
            None => Utc::now().timestamp(),
        };

        Ok(version_from_key(key))
    }

    /// Write the marketplace catalog beside the output root
    async fn write_catalog(&self, marketplace: &Marketplace) -> Result<()> {
        let path = self.paths.catalog_file();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(marketplace)? + "\n";
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;

        Ok(())
    }
}
