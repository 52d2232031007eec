//! Subcommand implementations.

pub mod diff;
pub mod list;
pub mod status;
pub mod sync;

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolve the sync root: `--root` if given, else the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("could not determine current directory"),
    }
}
