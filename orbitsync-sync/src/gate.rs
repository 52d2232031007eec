//! Change-detection gate — decides whether regeneration should run.
//!
//! Checks, in order:
//! 1. no prior snapshot (first run) ⇒ changed
//! 2. feed `meta.timestamp` string inequality ⇒ changed
//! 3. total record-count inequality ⇒ changed
//! 4. mainnet-with-chain-id count inequality ⇒ changed
//!
//! Pure function of prior snapshot vs fresh payload; callers handle the
//! corrupt-cache (fail open) and missing-artifact guards.

use std::fmt;

use orbitsync_core::types::{ChainStatus, FeedPayload};

/// Outcome of comparing the fresh feed against the cached snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeDecision {
    /// No usable snapshot exists — always regenerate.
    FirstRun,
    TimestampChanged { cached: String, fetched: String },
    RecordCountChanged { cached: usize, fetched: usize },
    MainnetCountChanged { cached: usize, fetched: usize },
    Unchanged,
}

impl ChangeDecision {
    pub fn is_changed(&self) -> bool {
        !matches!(self, ChangeDecision::Unchanged)
    }
}

impl fmt::Display for ChangeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDecision::FirstRun => write!(f, "no prior snapshot"),
            ChangeDecision::TimestampChanged { cached, fetched } => {
                write!(f, "feed timestamp changed ({cached} -> {fetched})")
            }
            ChangeDecision::RecordCountChanged { cached, fetched } => {
                write!(f, "record count changed ({cached} -> {fetched})")
            }
            ChangeDecision::MainnetCountChanged { cached, fetched } => {
                write!(f, "mainnet chain count changed ({cached} -> {fetched})")
            }
            ChangeDecision::Unchanged => write!(f, "feed unchanged"),
        }
    }
}

/// Count of records with status `Mainnet` and a present chain id.
pub fn mainnet_with_chain_id_count(feed: &FeedPayload) -> usize {
    feed.content
        .iter()
        .filter(|r| r.chain.status == ChainStatus::Mainnet && r.chain.chain_id.is_some())
        .count()
}

/// Compare the fresh feed against the previously cached one.
pub fn detect_change(previous: Option<&FeedPayload>, fetched: &FeedPayload) -> ChangeDecision {
    let Some(previous) = previous else {
        return ChangeDecision::FirstRun;
    };

    if previous.meta.timestamp != fetched.meta.timestamp {
        return ChangeDecision::TimestampChanged {
            cached: previous.meta.timestamp.clone(),
            fetched: fetched.meta.timestamp.clone(),
        };
    }

    if previous.content.len() != fetched.content.len() {
        return ChangeDecision::RecordCountChanged {
            cached: previous.content.len(),
            fetched: fetched.content.len(),
        };
    }

    let cached_mainnet = mainnet_with_chain_id_count(previous);
    let fetched_mainnet = mainnet_with_chain_id_count(fetched);
    if cached_mainnet != fetched_mainnet {
        return ChangeDecision::MainnetCountChanged {
            cached: cached_mainnet,
            fetched: fetched_mainnet,
        };
    }

    ChangeDecision::Unchanged
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitsync_core::types::{ChainDescriptor, FeedMeta, RemoteChainRecord};

    fn record(slug: &str, status: ChainStatus, chain_id: Option<u64>) -> RemoteChainRecord {
        RemoteChainRecord {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: None,
            category_id: None,
            color: None,
            chain: ChainDescriptor {
                status,
                chain_id,
                parent_chain: Some("Arbitrum One".to_string()),
                deployer_team: None,
                layer: None,
            },
        }
    }

    fn feed(timestamp: &str, content: Vec<RemoteChainRecord>) -> FeedPayload {
        FeedPayload {
            meta: FeedMeta {
                timestamp: timestamp.to_string(),
            },
            content,
        }
    }

    #[test]
    fn first_run_is_changed() {
        let fresh = feed("t1", vec![]);
        let decision = detect_change(None, &fresh);
        assert_eq!(decision, ChangeDecision::FirstRun);
        assert!(decision.is_changed());
    }

    #[test]
    fn identical_feeds_are_unchanged() {
        let a = feed("t1", vec![record("a", ChainStatus::Mainnet, Some(1))]);
        let b = a.clone();
        assert_eq!(detect_change(Some(&a), &b), ChangeDecision::Unchanged);
    }

    #[test]
    fn timestamp_difference_wins_over_later_checks() {
        let cached = feed("t1", vec![record("a", ChainStatus::Mainnet, Some(1))]);
        let fresh = feed("t2", vec![]);
        assert_eq!(
            detect_change(Some(&cached), &fresh),
            ChangeDecision::TimestampChanged {
                cached: "t1".to_string(),
                fetched: "t2".to_string(),
            }
        );
    }

    #[test]
    fn record_count_difference_detected() {
        let cached = feed("t1", vec![record("a", ChainStatus::Testnet, None)]);
        let fresh = feed(
            "t1",
            vec![
                record("a", ChainStatus::Testnet, None),
                record("b", ChainStatus::Testnet, None),
            ],
        );
        assert_eq!(
            detect_change(Some(&cached), &fresh),
            ChangeDecision::RecordCountChanged {
                cached: 1,
                fetched: 2,
            }
        );
    }

    #[test]
    fn mainnet_count_change_detected_at_equal_total_count() {
        // Same timestamp, same total, but one record flipped to mainnet.
        let cached = feed(
            "t1",
            vec![
                record("a", ChainStatus::Mainnet, Some(1)),
                record("b", ChainStatus::Testnet, Some(2)),
            ],
        );
        let fresh = feed(
            "t1",
            vec![
                record("a", ChainStatus::Mainnet, Some(1)),
                record("b", ChainStatus::Mainnet, Some(2)),
            ],
        );
        assert_eq!(
            detect_change(Some(&cached), &fresh),
            ChangeDecision::MainnetCountChanged {
                cached: 1,
                fetched: 2,
            }
        );
    }

    #[test]
    fn mainnet_without_chain_id_does_not_count() {
        let f = feed(
            "t1",
            vec![
                record("a", ChainStatus::Mainnet, Some(1)),
                record("b", ChainStatus::Mainnet, None),
                record("c", ChainStatus::Testnet, Some(3)),
            ],
        );
        assert_eq!(mainnet_with_chain_id_count(&f), 1);
    }

    #[test]
    fn decision_display_names_the_reason() {
        let decision = ChangeDecision::TimestampChanged {
            cached: "t1".to_string(),
            fetched: "t2".to_string(),
        };
        assert_eq!(decision.to_string(), "feed timestamp changed (t1 -> t2)");
        assert_eq!(ChangeDecision::Unchanged.to_string(), "feed unchanged");
    }
}
