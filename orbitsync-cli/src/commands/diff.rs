//! `orbitsync diff` — unified diff of what sync would write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use orbitsync_sync::{diff, feed};

use crate::commands::resolve_root;

/// Arguments for `orbitsync diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Directory the cache snapshot and generated file live under
    /// (default: current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Upstream feed URL override.
    #[arg(long, default_value = orbitsync_sync::FEED_URL)]
    pub url: String,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let root = resolve_root(self.root)?;
        let fetched = feed::fetch_feed(&self.url)
            .with_context(|| format!("diff failed (feed: {})", self.url))?;
        let diffs = diff::diff_artifacts(&root, &self.url, &fetched)?;

        if diffs.is_empty() {
            println!("✓ generated registry is up to date");
            return Ok(());
        }

        for file_diff in &diffs {
            print!("{}", file_diff.unified_diff);
        }
        Ok(())
    }
}
