//! Orbitsync core library — feed/domain types, cache snapshot persistence,
//! errors.
//!
//! Public API surface:
//! - [`types`] — feed payload, processed chain records, newtypes
//! - [`error`] — [`SnapshotError`]
//! - [`snapshot`] — load / save of the raw-feed cache snapshot

pub mod error;
pub mod snapshot;
pub mod types;

pub use error::SnapshotError;
pub use snapshot::{CacheSnapshot, SnapshotState};
pub use types::{
    Caip2, ChainColor, ChainDescriptor, ChainStatus, ColorPair, FeedMeta, FeedPayload,
    LogoPlaceholder, OrbitMetadata, ProcessedChainRecord, RemoteChainRecord, ThemeColors,
};
