//! `orbitsync list` — chains in the current cache snapshot.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use orbitsync_core::snapshot::{self, SnapshotState};
use orbitsync_core::types::ProcessedChainRecord;
use orbitsync_sync::transform;

use crate::commands::resolve_root;

/// Arguments for `orbitsync list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory the cache snapshot lives under (default: current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Emit the processed records as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ChainRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CAIP-2")]
    caip2: String,
    #[tabled(rename = "PARENT")]
    parent: String,
    #[tabled(rename = "LAYER")]
    layer: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
}

impl From<&ProcessedChainRecord> for ChainRow {
    fn from(chain: &ProcessedChainRecord) -> Self {
        ChainRow {
            name: chain.name.clone(),
            caip2: chain.caip2.to_string(),
            parent: chain.metadata.parent_chain.clone(),
            layer: chain
                .metadata
                .layer
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string()),
            category: chain
                .metadata
                .category
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let root = resolve_root(self.root)?;

        let cached = match snapshot::load_at(&root)? {
            SnapshotState::Present(cached) => cached,
            SnapshotState::Missing => {
                println!("No cache snapshot. Run `orbitsync sync` first.");
                return Ok(());
            }
            SnapshotState::Corrupt { path } => {
                println!(
                    "Cache snapshot at {} is unparsable. Run `orbitsync sync` to rebuild it.",
                    path.display()
                );
                return Ok(());
            }
        };

        let outcome = transform::process_feed(&cached.feed);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome.chains)?);
            return Ok(());
        }

        if outcome.chains.is_empty() {
            println!("No Orbit chains in the cached feed.");
            return Ok(());
        }

        let rows: Vec<ChainRow> = outcome.chains.iter().map(ChainRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{table}");
        println!("{} chain(s), feed timestamp {}", outcome.chains.len(), cached.feed.meta.timestamp);
        Ok(())
    }
}
