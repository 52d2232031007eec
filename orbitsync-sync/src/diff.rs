//! Dry-run unified diff support for `orbitsync diff`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use orbitsync_renderer::{ArtifactKind, Renderer, TemplateContext};

use crate::error::{io_err, SyncError};
use crate::feed::Fetched;
use crate::transform;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render what `sync` would generate from `fetched` and compare it to the
/// current on-disk artifact content.
///
/// No files are written.
pub fn diff_artifacts(root: &Path, url: &str, fetched: &Fetched) -> Result<Vec<FileDiff>, SyncError> {
    let outcome = transform::process_feed(&fetched.feed);
    let ctx = TemplateContext::new(outcome.chains, fetched.feed.meta.timestamp.as_str(), url);
    let renderer = Renderer::new()?;

    let mut diffs = Vec::new();
    for artifact in ArtifactKind::all() {
        for (path, rendered) in renderer.render(&ctx, *artifact, root)? {
            let rendered = normalize_line_endings(&rendered);
            let existing = read_existing_or_empty(&path)?;
            if existing == rendered {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path.as_path());
            let old_header = format!("a/{}", relative.display());
            let new_header = format!("b/{}", relative.display());
            let unified = TextDiff::from_lines(&existing, &rendered)
                .unified_diff()
                .header(&old_header, &new_header)
                .context_radius(3)
                .to_string();

            diffs.push(FileDiff {
                path,
                unified_diff: unified,
            });
        }
    }

    Ok(diffs)
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
