//! Upstream feed client — one GET, no retry, no configured timeout.
//!
//! A transient failure is fatal to the run; the operator re-invokes the
//! tool. A hung upstream hangs the run — accepted limitation.

use serde_json::Value;

use orbitsync_core::types::FeedPayload;

use crate::error::SyncError;

/// Fixed upstream feed URL. Overridable per run via `--url` (tests, mirrors).
pub const FEED_URL: &str = "https://api.growthepie.xyz/v1/labels/orbit_chains.json";

/// A fetched feed, kept both verbatim and typed.
///
/// `raw` is persisted as the cache snapshot exactly as received (unknown
/// fields included); `feed` is the typed view the gate and the transform
/// pipeline operate on.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub raw: Value,
    pub feed: FeedPayload,
}

/// Parse a feed body into its raw and typed forms.
pub fn parse_feed(body: &str) -> Result<Fetched, SyncError> {
    let raw: Value = serde_json::from_str(body)?;
    let feed: FeedPayload = serde_json::from_value(raw.clone())?;
    Ok(Fetched { raw, feed })
}

/// GET the feed from `url`.
///
/// Non-2xx responses and transport errors map to distinct [`SyncError`]
/// variants; both are fatal to the caller.
pub fn fetch_feed(url: &str) -> Result<Fetched, SyncError> {
    tracing::info!("fetching feed: {url}");
    let response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => SyncError::HttpStatus {
            url: url.to_string(),
            status,
        },
        other => SyncError::Transport {
            url: url.to_string(),
            source: Box::new(other),
        },
    })?;

    let body = response.into_string().map_err(|source| SyncError::Body {
        url: url.to_string(),
        source,
    })?;
    let fetched = parse_feed(&body)?;
    tracing::debug!(
        "fetched {} record(s), feed timestamp {}",
        fetched.feed.content.len(),
        fetched.feed.meta.timestamp
    );
    Ok(fetched)
}
