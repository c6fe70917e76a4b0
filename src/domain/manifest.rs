//! Per-plugin manifest and README synthesis.
//!
//! Every generated plugin carries a `.claude-plugin/plugin.json` manifest
//! and a README with fixed installation instructions. Downstream installers
//! consume the README text as-is, so the template must not drift.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::config::CLAUDE_PLUGIN_DIR;

/// Manifest file name inside [`CLAUDE_PLUGIN_DIR`]
pub const MANIFEST_FILE: &str = "plugin.json";

/// Publisher identity stamped into every manifest and the catalog
pub const PUBLISHER_NAME: &str = "Eleanor Berger";
pub const PUBLISHER_URL: &str = "https://intellectronica.net";

/// Repository hosting the skill sources
pub const REPOSITORY_URL: &str = "https://github.com/intellectronica/agent-skills";

/// License identifier applied to every plugin
pub const LICENSE: &str = "MIT";

/// Reserved for manual bumps; the patch slot carries the history timestamp
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;

/// Compose a plugin version from an integer ordering key
pub fn version_from_key(key: i64) -> String {
    format!("{}.{}.{}", VERSION_MAJOR, VERSION_MINOR, key)
}

/// A name/URL pair (plugin author, marketplace owner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub url: String,
}

impl Identity {
    /// The fixed publisher identity
    pub fn publisher() -> Self {
        Self {
            name: PUBLISHER_NAME.to_string(),
            url: PUBLISHER_URL.to_string(),
        }
    }
}

/// Plugin manifest written to `.claude-plugin/plugin.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: Identity,
    pub repository: String,
    pub homepage: String,
    pub license: String,
}

impl PluginManifest {
    /// Build the manifest for a plugin
    pub fn new(name: &str, description: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: description.to_string(),
            author: Identity::publisher(),
            repository: REPOSITORY_URL.to_string(),
            homepage: format!("{}/tree/main/plugins/{}", REPOSITORY_URL, name),
            license: LICENSE.to_string(),
        }
    }

    /// Write the manifest under `<plugin_dir>/.claude-plugin/plugin.json`
    pub async fn write(&self, plugin_dir: &Path) -> Result<PathBuf> {
        let manifest_dir = plugin_dir.join(CLAUDE_PLUGIN_DIR);
        fs::create_dir_all(&manifest_dir)
            .await
            .with_context(|| format!("Failed to create {}", manifest_dir.display()))?;

        let path = manifest_dir.join(MANIFEST_FILE);
        let content = serde_json::to_string_pretty(self)? + "\n";
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

        Ok(path)
    }
}

/// Render the plugin README.
///
/// The installation instructions are fixed text parameterized only by the
/// plugin name; consumers match on them verbatim.
pub fn render_readme(name: &str, description: &str) -> String {
    format!(
        "# {name}\n\
         \n\
         {description}\n\
         \n\
         ## Installation\n\
         \n\
         ### Claude Code / Cowork\n\
         \n\
         ```bash\n\
         /plugin marketplace add intellectronica/agent-skills\n\
         /plugin install {name}@intellectronica-skills\n\
         ```\n\
         \n\
         ### npx skills\n\
         \n\
         ```bash\n\
         npx skills add intellectronica/agent-skills --skill {name}\n\
         ```\n\
         \n\
         ---\n\
         \n\
         > This plugin is auto-generated from [skills/{name}](../../skills/{name}).\n"
    )
}

/// Write the generated README at the plugin root
pub async fn write_readme(plugin_dir: &Path, name: &str, description: &str) -> Result<PathBuf> {
    let path = plugin_dir.join("README.md");
    fs::write(&path, render_readme(name, description))
        .await
        .with_context(|| format!("Failed to write README: {}", path.display()))?;

    Ok(path)
}
