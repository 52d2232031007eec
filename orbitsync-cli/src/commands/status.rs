//! `orbitsync status` — cache snapshot and generated-artifact visibility.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use orbitsync_core::snapshot::{self, SnapshotState};
use orbitsync_sync::{gate, pipeline, transform};

use crate::commands::resolve_root;

/// Arguments for `orbitsync status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Directory the cache snapshot and generated file live under
    /// (default: current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct StatusReport {
    snapshot: &'static str,
    snapshot_path: String,
    feed_timestamp: Option<String>,
    total_records: Option<usize>,
    mainnet_records: Option<usize>,
    chain_count: Option<usize>,
    registry_path: String,
    registry_present: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let root = resolve_root(self.root)?;
        let registry_path = pipeline::registry_path(&root);
        let snapshot_path = snapshot::snapshot_path_at(&root);

        let mut report = StatusReport {
            snapshot: "missing",
            snapshot_path: snapshot_path.display().to_string(),
            feed_timestamp: None,
            total_records: None,
            mainnet_records: None,
            chain_count: None,
            registry_path: registry_path.display().to_string(),
            registry_present: registry_path.exists(),
        };

        match snapshot::load_at(&root)? {
            SnapshotState::Missing => {}
            SnapshotState::Corrupt { .. } => report.snapshot = "corrupt",
            SnapshotState::Present(cached) => {
                report.snapshot = "present";
                report.feed_timestamp = Some(cached.feed.meta.timestamp.clone());
                report.total_records = Some(cached.feed.content.len());
                report.mainnet_records = Some(gate::mainnet_with_chain_id_count(&cached.feed));
                report.chain_count = Some(transform::process_feed(&cached.feed).chains.len());
            }
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &StatusReport) {
    match report.snapshot {
        "present" => println!("snapshot:  {} ({})", "present".green(), report.snapshot_path),
        "corrupt" => println!(
            "snapshot:  {} ({}) — next sync regenerates",
            "corrupt".red(),
            report.snapshot_path
        ),
        _ => println!(
            "snapshot:  {} ({}) — never synced",
            "missing".yellow(),
            report.snapshot_path
        ),
    }

    if let Some(timestamp) = &report.feed_timestamp {
        println!("feed:      timestamp {timestamp}");
    }
    if let (Some(total), Some(mainnet), Some(chains)) = (
        report.total_records,
        report.mainnet_records,
        report.chain_count,
    ) {
        println!("records:   {total} total, {mainnet} mainnet with chain id, {chains} in registry");
    }

    if report.registry_present {
        println!("registry:  {} ({})", "present".green(), report.registry_path);
    } else {
        println!(
            "registry:  {} ({}) — run `orbitsync sync`",
            "missing".red(),
            report.registry_path
        );
    }
}
