//! Domain types for the Orbit chain feed and the processed registry.
//!
//! [`RemoteChainRecord`] mirrors one entry of the upstream portal feed and is
//! deliberately lenient: every field the selection predicate does not depend
//! on is optional, and unknown status strings deserialize to
//! [`ChainStatus::Unknown`] instead of failing the whole payload.
//! [`ProcessedChainRecord`] is the derived output entity, keyed by CAIP-2.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A chain-agnostic identifier of the form `eip155:<chainId>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Caip2(pub String);

impl Caip2 {
    /// Build the canonical `eip155:<chainId>` identifier (decimal, no padding).
    pub fn from_chain_id(chain_id: u64) -> Self {
        Self(format!("eip155:{chain_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Caip2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Caip2 {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Caip2 {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Deployment status of a chain as reported by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChainStatus {
    Mainnet,
    Testnet,
    #[serde(rename = "In development")]
    InDevelopment,
    /// Any status string the feed may introduce that we do not recognize.
    /// Never matches the mainnet selection predicate.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for ChainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainStatus::Mainnet => write!(f, "Mainnet"),
            ChainStatus::Testnet => write!(f, "Testnet"),
            ChainStatus::InDevelopment => write!(f, "In development"),
            ChainStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// Feed (input) structs
// ---------------------------------------------------------------------------

/// Feed-level metadata. The timestamp is compared as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMeta {
    pub timestamp: String,
}

/// The full upstream payload: `{ meta: { timestamp }, content: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPayload {
    pub meta: FeedMeta,
    #[serde(default)]
    pub content: Vec<RemoteChainRecord>,
}

/// Visual identity colors of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChainColor {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
}

/// Nested chain descriptor inside a feed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    #[serde(default)]
    pub status: ChainStatus,
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub parent_chain: Option<String>,
    #[serde(default)]
    pub deployer_team: Option<String>,
    #[serde(default)]
    pub layer: Option<u32>,
}

/// One entry of the upstream feed. Read-only; fetched fresh on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteChainRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub color: Option<ChainColor>,
    #[serde(default)]
    pub chain: ChainDescriptor,
}

// ---------------------------------------------------------------------------
// Processed (output) structs
// ---------------------------------------------------------------------------

/// Primary/secondary color pair for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub primary: String,
    pub secondary: String,
}

/// Two-theme palette plus text-legibility flag for the primary color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: ColorPair,
    pub dark: ColorPair,
    /// `true` when the primary color is light enough that dark text is
    /// legible on top of it (relative luminance > 0.5).
    pub dark_text_on_background: bool,
}

/// Generated placeholder logo: a 15×15 vector glyph, never fetched remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoPlaceholder {
    pub body: String,
    pub width: u32,
    pub height: u32,
}

/// Orbit-specific metadata carried alongside each processed chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitMetadata {
    pub parent_chain: String,
    pub deployer_team: Option<String>,
    pub status: ChainStatus,
    pub layer: Option<u32>,
    pub category: Option<String>,
}

/// A fully derived chain entry, exactly one per unique [`Caip2`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedChainRecord {
    pub id: String,
    pub name: String,
    /// `name` hard-truncated to 12 characters; no ellipsis.
    pub short_name: String,
    pub caip2: Caip2,
    pub chain_id: u64,
    /// Fixed discriminator marking this as a derived Orbit chain.
    pub is_orbit: bool,
    pub metadata: OrbitMetadata,
    pub colors: ThemeColors,
    pub logo: LogoPlaceholder,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
