//! Error types for orbitsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from cache snapshot operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (snapshot save path).
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`SnapshotError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SnapshotError {
    SnapshotError::Io {
        path: path.into(),
        source,
    }
}
