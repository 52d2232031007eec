//! Error types for orbitsync-renderer.

use thiserror::Error;

/// All errors that can arise from rendering the generated artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building the tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
