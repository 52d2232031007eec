//! `orbitsync sync` — fetch the feed and regenerate the chain registry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use orbitsync_sync::{
    pipeline::{self, SyncOptions},
    SyncOutcome, WriteResult,
};

use crate::commands::resolve_root;

/// Arguments for `orbitsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Regenerate even if the feed is unchanged since the last sync.
    #[arg(long)]
    pub force: bool,

    /// Directory the cache snapshot and generated file live under
    /// (default: current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Upstream feed URL override.
    #[arg(long, default_value = orbitsync_sync::FEED_URL)]
    pub url: String,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let root = resolve_root(self.root)?;
        let opts = SyncOptions {
            dry_run: self.dry_run,
            force: self.force,
        };
        let outcome = pipeline::run(&root, &self.url, &opts)
            .with_context(|| format!("sync failed (feed: {})", self.url))?;
        print_outcome(&outcome, self.dry_run);
        Ok(())
    }
}

fn print_outcome(outcome: &SyncOutcome, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    match outcome {
        SyncOutcome::Skipped { decision } => {
            println!("{prefix}✓ nothing to do — {decision}");
        }
        SyncOutcome::Synced {
            decision,
            chain_count,
            duplicates,
            writes,
        } => {
            let written = writes
                .iter()
                .filter(|w| {
                    matches!(
                        w,
                        WriteResult::Written { .. } | WriteResult::WouldWrite { .. }
                    )
                })
                .count();
            let unchanged = writes.len() - written;

            println!(
                "{prefix}✓ synced {chain_count} chain(s) ({written} written, {unchanged} unchanged) — {decision}"
            );
            for w in writes {
                match w {
                    WriteResult::Written { path } => println!("  ✎  {}", path.display()),
                    WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
                    WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
                }
            }
            for dup in duplicates {
                println!(
                    "  {} duplicate {}: kept '{}', dropped '{}'",
                    "⚠".yellow(),
                    dup.caip2,
                    dup.kept_name,
                    dup.dropped_name
                );
            }
        }
    }
}
