//! Marketplace catalog types.
//!
//! The catalog is the aggregate record of every generated plugin, written
//! once per run as `marketplace.json`. Entries keep discovery order.

use serde::{Deserialize, Serialize};

use super::manifest::Identity;
use crate::config::PLUGINS_DIR;

/// Catalog schema identifier
pub const MARKETPLACE_SCHEMA: &str = "https://anthropic.com/claude-code/marketplace.schema.json";

/// Published marketplace name
pub const MARKETPLACE_NAME: &str = "intellectronica-skills";

/// Published marketplace description
pub const MARKETPLACE_DESCRIPTION: &str =
    "A curated collection of agent skills for Claude Code and Cowork";

/// Plugin category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integrations,
    Development,
    Media,
    Productivity,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Integrations => write!(f, "integrations"),
            Category::Development => write!(f, "development"),
            Category::Media => write!(f, "media"),
            Category::Productivity => write!(f, "productivity"),
        }
    }
}

/// Category applied to skills with no explicit mapping
pub const DEFAULT_CATEGORY: Category = Category::Productivity;

/// Fixed skill name to category mapping
const SKILL_CATEGORIES: &[(&str, Category)] = &[
    ("anki-connect", Category::Integrations),
    ("notion-api", Category::Integrations),
    ("raindrop-api", Category::Integrations),
    ("todoist-api", Category::Integrations),
    ("gog-cli", Category::Integrations),
    ("context7", Category::Development),
    ("copilot-sdk", Category::Development),
    ("mgrep-code-search", Category::Development),
    ("here-be-git", Category::Development),
    ("gpt-image-1-5", Category::Media),
    ("nano-banana-pro", Category::Media),
    ("beautiful-mermaid", Category::Productivity),
    ("lorem-ipsum", Category::Productivity),
    ("promptify", Category::Productivity),
    ("markdown-converter", Category::Productivity),
    ("ray-so-code-snippet", Category::Productivity),
    ("tavily", Category::Productivity),
    ("ultrathink", Category::Productivity),
    ("youtube-transcript", Category::Productivity),
];

/// Category for a skill, defaulting to [`DEFAULT_CATEGORY`]
pub fn category_for(name: &str) -> Category {
    SKILL_CATEGORIES
        .iter()
        .find(|(skill, _)| *skill == name)
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// A single plugin entry in the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceEntry {
    /// Plugin name (unique catalog key)
    pub name: String,

    /// Relative path of the generated plugin
    pub source: String,

    /// Plugin description
    pub description: String,

    /// Derived version (`0.1.<timestamp>`)
    pub version: String,

    /// Assigned category
    pub category: Category,
}

impl MarketplaceEntry {
    /// Catalog `source` path for a plugin name
    pub fn source_path(name: &str) -> String {
        format!("./{}/{}", PLUGINS_DIR, name)
    }
}

/// The aggregate marketplace catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marketplace {
    /// Schema identifier
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Marketplace name
    pub name: String,

    /// Marketplace description
    pub description: String,

    /// Marketplace owner
    pub owner: Identity,

    /// Plugin entries in discovery order
    pub plugins: Vec<MarketplaceEntry>,
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}

impl Marketplace {
    /// Create an empty catalog with the fixed descriptive fields
    pub fn new() -> Self {
        Self {
            schema: MARKETPLACE_SCHEMA.to_string(),
            name: MARKETPLACE_NAME.to_string(),
            description: MARKETPLACE_DESCRIPTION.to_string(),
            owner: Identity::publisher(),
            plugins: Vec::new(),
        }
    }

    /// Append a plugin entry
    pub fn add(&mut self, entry: MarketplaceEntry) {
        self.plugins.push(entry);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_for("notion-api"), Category::Integrations);
        assert_eq!(category_for("context7"), Category::Development);
        assert_eq!(category_for("gpt-image-1-5"), Category::Media);
        assert_eq!(category_for("lorem-ipsum"), Category::Productivity);
    }

    #[test]
    fn test_category_default() {
        assert_eq!(category_for("some-new-skill"), Category::Productivity);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Integrations).unwrap(),
            "\"integrations\""
        );
    }

    #[test]
    fn test_source_path() {
        assert_eq!(MarketplaceEntry::source_path("foo"), "./plugins/foo");
    }

    #[test]
    fn test_marketplace_fixed_fields() {
        let marketplace = Marketplace::new();

        assert_eq!(marketplace.name, "intellectronica-skills");
        assert_eq!(marketplace.owner.name, "Eleanor Berger");
        assert!(marketplace.is_empty());

        let json = serde_json::to_value(&marketplace).unwrap();
        assert_eq!(
            json["$schema"],
            "https://anthropic.com/claude-code/marketplace.schema.json"
        );
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut marketplace = Marketplace::new();
        for name in ["alpha", "beta", "gamma"] {
            marketplace.add(MarketplaceEntry {
                name: name.to_string(),
                source: MarketplaceEntry::source_path(name),
                description: format!("Agent skill: {}", name),
                version: "0.1.1".to_string(),
                category: DEFAULT_CATEGORY,
            });
        }

        let names: Vec<&str> = marketplace.plugins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
        assert_eq!(marketplace.len(), 3);
    }
}
