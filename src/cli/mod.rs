//! Command-line interface for skillpack.
//!
//! A bare invocation regenerates the full plugin tree and marketplace
//! catalog from the `skills/` source root in the current directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Paths;
use crate::core::Generator;

/// skillpack - package agent skills into distributable plugins
#[derive(Parser, Debug)]
#[command(name = "skillpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root containing the skills/ source tree
    #[arg(long, env = "SKILLPACK_ROOT")]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Execute the CLI
    pub async fn execute(self) -> Result<()> {
        let paths = match self.root {
            Some(root) => Paths::new(root),
            None => Paths::from_current_dir()?,
        };

        let generator = Generator::new(paths);
        generator.generate().await?;

        Ok(())
    }
}
