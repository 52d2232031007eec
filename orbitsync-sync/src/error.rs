//! Error types for orbitsync-sync.

use std::path::PathBuf;

use thiserror::Error;

use orbitsync_core::SnapshotError;
use orbitsync_renderer::RenderError;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error from cache snapshot persistence.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Upstream feed answered with a non-2xx status.
    #[error("feed request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Network-level failure talking to the upstream feed.
    #[error("feed request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Failure reading the response body off the wire.
    #[error("failed reading feed body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Feed payload JSON parse/serialize error.
    #[error("feed payload JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
