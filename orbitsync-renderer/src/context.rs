//! Template context — serializable rendering payload built from processed
//! chain records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tera::Context;

use orbitsync_core::types::ProcessedChainRecord;

use crate::error::RenderError;

/// Rendering payload for the generated chain-registry module.
///
/// `chains` must already be deduplicated and sorted; the renderer emits them
/// in the order given so the artifact stays deterministic and diff-stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub meta: MetaCtx,
    pub chains: Vec<ProcessedChainRecord>,
}

/// Provenance header data for the generated file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    /// `meta.timestamp` of the feed the artifact was generated from.
    pub feed_timestamp: String,
    pub source_url: String,
    pub generated_at: DateTime<Utc>,
    pub chain_count: usize,
}

impl TemplateContext {
    /// Build a context from an already-processed, ordered record set.
    pub fn new(
        chains: Vec<ProcessedChainRecord>,
        feed_timestamp: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        let chain_count = chains.len();
        TemplateContext {
            meta: MetaCtx {
                feed_timestamp: feed_timestamp.into(),
                source_url: source_url.into(),
                generated_at: Utc::now(),
                chain_count,
            },
            chains,
        }
    }

    /// Convert to a `tera::Context` for rendering.
    pub fn to_tera_context(&self) -> Result<Context, RenderError> {
        Ok(Context::from_serialize(self)?)
    }
}
