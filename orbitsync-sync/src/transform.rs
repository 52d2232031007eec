//! Record filter-and-transform pipeline.
//!
//! Selection: mainnet status, present chain id, parent chain on the exact
//! allow-list. Derivations: CAIP-2 key, color defaults, luminance-based
//! text flag, 12-char truncation, placeholder logo, description fallback.
//! Dedup is insert-if-absent keyed by CAIP-2 with collisions collected into
//! a side list, never raised. Output is sorted ascending by name.
//!
//! Everything here is pure and in-memory; file I/O lives in [`crate::writer`]
//! and [`crate::pipeline`].

use std::collections::HashMap;

use orbitsync_core::types::{
    Caip2, ChainStatus, ColorPair, FeedPayload, LogoPlaceholder, OrbitMetadata,
    ProcessedChainRecord, RemoteChainRecord, ThemeColors,
};

/// Parent chains a record must name, verbatim, to be kept.
pub const ALLOWED_PARENT_CHAINS: &[&str] = &["Ethereum", "Arbitrum One"];

/// Fallback primary color when the feed carries none.
pub const DEFAULT_PRIMARY_COLOR: &str = "#6B7280";

/// Fallback secondary color when neither secondary nor primary is present.
pub const DEFAULT_SECONDARY_COLOR: &str = "#9CA3AF";

const SHORT_NAME_MAX: usize = 12;
const LOGO_SIZE: u32 = 15;

// ---------------------------------------------------------------------------
// Per-record derivations
// ---------------------------------------------------------------------------

/// Relative luminance of a `#RRGGBB` color in `0.0..=1.0`, using the
/// 0.299/0.587/0.114 channel weights. `None` if the string is not six hex
/// digits (after an optional leading `#`).
pub fn relative_luminance(color: &str) -> Option<f64> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or(0) as f64
    };
    let (r, g, b) = (channel(0..2), channel(2..4), channel(4..6));
    Some((0.299 * r + 0.587 * g + 0.114 * b) / 255.0)
}

/// Whether dark text is legible over `color` (background is "light").
pub fn dark_text_on(color: &str) -> bool {
    relative_luminance(color).is_some_and(|lum| lum > 0.5)
}

/// Hard truncation to the first 12 characters; no ellipsis, no
/// word-boundary awareness.
pub fn truncate_name(title: &str) -> String {
    title.chars().take(SHORT_NAME_MAX).collect()
}

/// Generate the fixed 15×15 placeholder logo: a circle in the chain's
/// primary color at 20% opacity plus the upper-cased first character of the
/// title, centered. Purely local computation — no logo is ever fetched.
pub fn placeholder_logo(primary: &str, title: &str) -> LogoPlaceholder {
    let initial: String = title
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    LogoPlaceholder {
        body: format!(
            "<circle cx=\"7.5\" cy=\"7.5\" r=\"7.5\" fill=\"{primary}\" fill-opacity=\"0.2\"/>\
             <text x=\"7.5\" y=\"10.5\" text-anchor=\"middle\" font-size=\"8\" fill=\"{primary}\">{initial}</text>"
        ),
        width: LOGO_SIZE,
        height: LOGO_SIZE,
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Transform one feed record, or `None` if the selection predicate drops it.
///
/// Kept: status exactly `Mainnet`, chain id present, parent chain verbatim
/// on [`ALLOWED_PARENT_CHAINS`]. Anything else (near-miss spellings
/// included) is dropped silently.
pub fn transform_record(record: &RemoteChainRecord) -> Option<ProcessedChainRecord> {
    if record.chain.status != ChainStatus::Mainnet {
        return None;
    }
    let chain_id = record.chain.chain_id?;
    let parent_chain = record.chain.parent_chain.as_deref()?;
    if !ALLOWED_PARENT_CHAINS.contains(&parent_chain) {
        return None;
    }

    let primary = non_empty(record.color.as_ref().and_then(|c| c.primary.as_ref()))
        .unwrap_or(DEFAULT_PRIMARY_COLOR)
        .to_string();
    let secondary = non_empty(record.color.as_ref().and_then(|c| c.secondary.as_ref()))
        .map(str::to_string)
        .or_else(|| {
            non_empty(record.color.as_ref().and_then(|c| c.primary.as_ref()))
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string());

    let pair = ColorPair {
        primary: primary.clone(),
        secondary,
    };
    let description = non_empty(record.description.as_ref())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "{} is an Arbitrum Orbit chain built on {}.",
                record.title, parent_chain
            )
        });

    Some(ProcessedChainRecord {
        id: record.slug.clone(),
        name: record.title.clone(),
        short_name: truncate_name(&record.title),
        caip2: Caip2::from_chain_id(chain_id),
        chain_id,
        is_orbit: true,
        metadata: OrbitMetadata {
            parent_chain: parent_chain.to_string(),
            deployer_team: record.chain.deployer_team.clone(),
            status: record.chain.status.clone(),
            layer: record.chain.layer,
            category: record.category_id.clone(),
        },
        colors: ThemeColors {
            light: pair.clone(),
            dark: pair,
            dark_text_on_background: dark_text_on(&primary),
        },
        logo: placeholder_logo(&primary, &record.title),
        description,
    })
}

// ---------------------------------------------------------------------------
// Feed-level pipeline: filter, dedup, sort
// ---------------------------------------------------------------------------

/// A dropped CAIP-2 collision, reported for operator visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateChain {
    pub caip2: Caip2,
    pub kept_name: String,
    pub dropped_name: String,
}

/// Result of processing one fetched feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    /// Deduplicated, name-sorted processed records.
    pub chains: Vec<ProcessedChainRecord>,
    /// Collisions dropped by first-occurrence-wins, in input order.
    pub duplicates: Vec<DuplicateChain>,
}

/// Run the full filter/transform/dedupe/sort pipeline over a feed.
pub fn process_feed(feed: &FeedPayload) -> ProcessOutcome {
    let mut chains: Vec<ProcessedChainRecord> = Vec::new();
    let mut seen: HashMap<Caip2, String> = HashMap::new();
    let mut duplicates = Vec::new();

    for record in &feed.content {
        let Some(processed) = transform_record(record) else {
            continue;
        };
        tracing::debug!("processed: {} ({})", processed.name, processed.caip2);

        match seen.get(&processed.caip2) {
            // Insert-if-absent: first occurrence in input order wins.
            None => {
                seen.insert(processed.caip2.clone(), processed.name.clone());
                chains.push(processed);
            }
            Some(kept_name) => {
                tracing::warn!(
                    "duplicate caip2 {}: keeping '{}', dropping '{}'",
                    processed.caip2,
                    kept_name,
                    processed.name
                );
                duplicates.push(DuplicateChain {
                    caip2: processed.caip2.clone(),
                    kept_name: kept_name.clone(),
                    dropped_name: processed.name,
                });
            }
        }
    }

    // Locale-aware ascending name sort, approximated as case-insensitive
    // Unicode ordering with a raw-name tiebreak for determinism.
    chains.sort_by(|a, b| {
        (a.name.to_lowercase(), &a.name).cmp(&(b.name.to_lowercase(), &b.name))
    });

    ProcessOutcome { chains, duplicates }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
