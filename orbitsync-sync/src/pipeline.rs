//! Top-level sync orchestration.
//!
//! `FETCHING → COMPARING → (SKIP | PROCESSING) → WRITING → DONE`, with any
//! error propagating straight out ([`crate::SyncError`] — the caller exits
//! non-zero). Processing runs fully in memory before any file is touched,
//! so either both artifacts (generated registry + cache snapshot) are
//! written or neither is.

use std::path::Path;

use orbitsync_core::snapshot::{self, CacheSnapshot, SnapshotState};
use orbitsync_renderer::{ArtifactKind, Renderer, TemplateContext};

use crate::error::SyncError;
use crate::feed::{self, Fetched};
use crate::gate::{self, ChangeDecision};
use crate::transform::{self, DuplicateChain};
use crate::writer::{self, WriteResult};

/// Options for a sync pipeline run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    /// Regenerate even when the change gate reports no change.
    pub force: bool,
}

/// Outcome of one sync run.
#[derive(Debug)]
pub enum SyncOutcome {
    /// Change gate found nothing to do; no file was touched.
    Skipped { decision: ChangeDecision },
    /// Pipeline ran; artifacts were written (or would be, in dry-run).
    Synced {
        decision: ChangeDecision,
        chain_count: usize,
        duplicates: Vec<DuplicateChain>,
        writes: Vec<WriteResult>,
    },
}

/// Fetch the feed from `url` and run the sync pipeline rooted at `root`.
///
/// This is the canonical entrypoint for `orbitsync sync`.
pub fn run(root: &Path, url: &str, opts: &SyncOptions) -> Result<SyncOutcome, SyncError> {
    let fetched = feed::fetch_feed(url)?;
    run_with_feed(root, url, fetched, opts)
}

/// Run the pipeline over an already-fetched payload.
///
/// Split out so tests (and `orbitsync diff`) can drive the compare /
/// process / write phases without a live upstream.
pub fn run_with_feed(
    root: &Path,
    url: &str,
    fetched: Fetched,
    opts: &SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    // COMPARING — corrupt cache fails open to "no snapshot".
    let previous = load_previous(root)?;
    let decision = gate::detect_change(previous.as_ref().map(|s| &s.feed), &fetched.feed);

    let artifact_path = registry_path(root);
    if !opts.force && !decision.is_changed() && artifact_path.exists() {
        tracing::info!("skip: {decision}");
        return Ok(SyncOutcome::Skipped { decision });
    }
    if !decision.is_changed() && !artifact_path.exists() {
        // A deleted generated file must not hide behind the fast path.
        tracing::warn!(
            "feed unchanged but {} is missing; regenerating",
            artifact_path.display()
        );
    }

    // PROCESSING — fully in memory.
    let outcome = transform::process_feed(&fetched.feed);
    let chain_count = outcome.chains.len();
    let ctx = TemplateContext::new(outcome.chains, fetched.feed.meta.timestamp.as_str(), url);

    let renderer = Renderer::new()?;
    let mut rendered = Vec::new();
    for artifact in ArtifactKind::all() {
        rendered.extend(renderer.render(&ctx, *artifact, root)?);
    }

    // WRITING — only after the whole pipeline succeeded in memory.
    let mut writes = Vec::new();
    for (path, content) in &rendered {
        writes.push(writer::atomic_write(path, content, opts.dry_run)?);
    }
    if !opts.dry_run {
        snapshot::save_at(root, &fetched.raw)?;
    }

    Ok(SyncOutcome::Synced {
        decision,
        chain_count,
        duplicates: outcome.duplicates,
        writes,
    })
}

/// The generated registry artifact path under `root`.
pub fn registry_path(root: &Path) -> std::path::PathBuf {
    ArtifactKind::ChainRegistry
        .output_paths(root)
        .into_iter()
        .next()
        .unwrap_or_else(|| root.join("src").join("generated").join("orbit_chains.rs"))
}

fn load_previous(root: &Path) -> Result<Option<CacheSnapshot>, SyncError> {
    match snapshot::load_at(root)? {
        SnapshotState::Missing => Ok(None),
        SnapshotState::Corrupt { path } => {
            tracing::warn!(
                "cache snapshot at {} is unparsable; assuming changed",
                path.display()
            );
            Ok(None)
        }
        SnapshotState::Present(snapshot) => Ok(Some(snapshot)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
