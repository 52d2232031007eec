//! # orbitsync-sync
//!
//! Feed fetch, change-detection gate, record transform pipeline, and the
//! hash-gated atomic writer for the generated chain registry.
//!
//! Call [`pipeline::run`] to execute a full sync against the upstream feed,
//! or [`pipeline::run_with_feed`] to drive the same pipeline from an
//! already-fetched payload (used by tests and `orbitsync diff`).

pub mod diff;
pub mod error;
pub mod feed;
pub mod gate;
pub mod pipeline;
pub mod transform;
pub mod writer;

pub use diff::FileDiff;
pub use error::SyncError;
pub use feed::{Fetched, FEED_URL};
pub use gate::ChangeDecision;
pub use pipeline::{SyncOptions, SyncOutcome};
pub use transform::{DuplicateChain, ProcessOutcome};
pub use writer::WriteResult;
