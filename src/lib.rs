//! skillpack - agent-skill packaging pipeline
//!
//! Transforms a `skills/` source tree into distributable plugins plus an
//! aggregate marketplace catalog. Every run is a full regeneration: the
//! output root is cleared, each skill is restructured into the canonical
//! plugin layout, and per-plugin manifests are collected into
//! `.claude-plugin/marketplace.json`.
//!
//! # Modules
//!
//! - `adapters`: External collaborators (git source history)
//! - `core`: Generation pipeline (Generator, tree shaping)
//! - `domain`: Data structures (Skill, PluginManifest, Marketplace)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Regenerate plugins/ and the marketplace catalog from skills/
//! skillpack
//!
//! # Run against another workspace root
//! skillpack --root /path/to/workspace
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::core::Generator;
pub use adapters::{GitHistory, HistorySource};
pub use config::Paths;
pub use domain::{Category, Marketplace, MarketplaceEntry, PluginManifest, Skill, SkillHeader};
