//! Cache snapshot — the raw upstream payload from the last sync.
//!
//! Persisted pretty-printed at `<root>/cache/orbit-feed.json`. The snapshot
//! holds the *unfiltered* feed exactly as fetched (unknown fields included),
//! not the processed output. A snapshot that exists but fails to parse is
//! reported as [`SnapshotState::Corrupt`]; callers treat that as "no
//! snapshot" so a damaged cache can never suppress a regeneration.
//!
//! # API pattern
//!
//! Every function takes an explicit `root: &Path`; tests pass a `TempDir`,
//! the CLI passes its `--root` (default: current directory).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{io_err, SnapshotError};
use crate::types::FeedPayload;

/// The last successfully persisted upstream payload, kept both verbatim and
/// typed. `raw` is what goes back to disk; `feed` is what the change gate
/// compares against.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSnapshot {
    pub raw: Value,
    pub feed: FeedPayload,
}

/// Outcome of loading the snapshot file.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotState {
    /// No snapshot file on disk (first run).
    Missing,
    /// A file exists but is not valid snapshot JSON. Treated as missing by
    /// the change gate (fail open), surfaced so callers can warn.
    Corrupt { path: PathBuf },
    Present(CacheSnapshot),
}

/// `<root>/cache/orbit-feed.json` — pure, no I/O.
pub fn snapshot_path_at(root: &Path) -> PathBuf {
    root.join("cache").join("orbit-feed.json")
}

/// Load the cache snapshot under `root`.
///
/// Missing file and unparsable file are both non-fatal; only genuine I/O
/// failures (permissions etc.) return `Err`.
pub fn load_at(root: &Path) -> Result<SnapshotState, SnapshotError> {
    let path = snapshot_path_at(root);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SnapshotState::Missing),
        Err(err) => return Err(io_err(&path, err)),
    };

    let Ok(raw) = serde_json::from_str::<Value>(&contents) else {
        return Ok(SnapshotState::Corrupt { path });
    };
    let Ok(feed) = serde_json::from_value::<FeedPayload>(raw.clone()) else {
        return Ok(SnapshotState::Corrupt { path });
    };
    Ok(SnapshotState::Present(CacheSnapshot { raw, feed }))
}

/// Save the raw upstream payload as the new snapshot, pretty-printed.
///
/// Creates the cache directory if needed and writes atomically via
/// `<path>.tmp` + rename.
pub fn save_at(root: &Path, raw: &Value) -> Result<PathBuf, SnapshotError> {
    let path = snapshot_path_at(root);
    let Some(dir) = path.parent() else {
        return Err(io_err(
            path,
            std::io::Error::other("invalid snapshot path"),
        ));
    };
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;

    let json = serde_json::to_string_pretty(raw)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_raw() -> Value {
        json!({
            "meta": {"timestamp": "2026-08-01T00:00:00Z"},
            "content": [
                {
                    "slug": "alpha",
                    "title": "Alpha Chain",
                    "chain": {"status": "Mainnet", "chainId": 42161, "parentChain": "Arbitrum One"},
                    "portalOnlyField": {"kept": true}
                }
            ]
        })
    }

    #[test]
    fn missing_when_file_absent() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_at(tmp.path()).unwrap(), SnapshotState::Missing);
    }

    #[test]
    fn roundtrip_save_load() {
        let tmp = TempDir::new().unwrap();
        let raw = sample_raw();
        save_at(tmp.path(), &raw).unwrap();

        match load_at(tmp.path()).unwrap() {
            SnapshotState::Present(snapshot) => {
                assert_eq!(snapshot.raw, raw);
                assert_eq!(snapshot.feed.meta.timestamp, "2026-08-01T00:00:00Z");
                assert_eq!(snapshot.feed.content.len(), 1);
            }
            other => panic!("expected present snapshot, got {other:?}"),
        }
    }

    #[test]
    fn snapshot_preserves_unknown_feed_fields() {
        let tmp = TempDir::new().unwrap();
        save_at(tmp.path(), &sample_raw()).unwrap();

        let disk = std::fs::read_to_string(snapshot_path_at(tmp.path())).unwrap();
        assert!(
            disk.contains("portalOnlyField"),
            "snapshot must carry the exact upstream payload, not our typed subset"
        );
    }

    #[test]
    fn corrupt_file_is_nonfatal() {
        let tmp = TempDir::new().unwrap();
        let path = snapshot_path_at(tmp.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        match load_at(tmp.path()).unwrap() {
            SnapshotState::Corrupt { path: reported } => assert_eq!(reported, path),
            other => panic!("expected corrupt, got {other:?}"),
        }
    }

    #[test]
    fn valid_json_with_wrong_shape_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = snapshot_path_at(tmp.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"totally": "unrelated"}"#).unwrap();

        assert!(matches!(
            load_at(tmp.path()).unwrap(),
            SnapshotState::Corrupt { .. }
        ));
    }

    #[test]
    fn tmp_file_cleaned_up_after_save() {
        let tmp = TempDir::new().unwrap();
        save_at(tmp.path(), &sample_raw()).unwrap();
        let tmp_path = snapshot_path_at(tmp.path()).with_extension("json.tmp");
        assert!(
            !tmp_path.exists(),
            "tmp file should be removed after atomic rename"
        );
    }

    #[test]
    fn save_is_pretty_printed() {
        let tmp = TempDir::new().unwrap();
        save_at(tmp.path(), &sample_raw()).unwrap();
        let disk = std::fs::read_to_string(snapshot_path_at(tmp.path())).unwrap();
        assert!(disk.contains("\n  "), "snapshot must be pretty-printed");
    }
}
