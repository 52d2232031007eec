//! Orbitsync — Orbit chain registry sync CLI.
//!
//! # Usage
//!
//! ```text
//! orbitsync sync [--dry-run] [--force] [--root <dir>] [--url <feed>]
//! orbitsync status [--root <dir>] [--json]
//! orbitsync diff [--root <dir>] [--url <feed>]
//! orbitsync list [--root <dir>] [--json]
//! ```
//!
//! Exit codes: 0 on success (including a no-op skip); 1 on any fetch,
//! parse, or write error.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, list::ListArgs, status::StatusArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "orbitsync",
    version,
    about = "Sync the Arbitrum Orbit chain registry from the upstream portal feed",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the feed and regenerate the chain registry if it changed.
    Sync(SyncArgs),

    /// Show cache snapshot and generated-artifact state.
    Status(StatusArgs),

    /// Show a unified diff of what sync would write.
    Diff(DiffArgs),

    /// List the chains in the current cache snapshot.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
