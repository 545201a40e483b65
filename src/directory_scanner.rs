// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for discovering work assets on disk.
//!
//! Walks a works directory and reports every regular file below it, keyed by
//! a logical path of the form `<works_dir_name>/<folder>/<file>`. Filtering by
//! layout and extension is left to the indexer so that folders without any
//! image still show up as works.

use crate::error::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// A file found under the works directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAsset {
    /// Logical path, always `/`-separated and rooted at the works segment.
    pub path: String,
    /// Location on disk.
    pub file: PathBuf,
}

/// Scans `root` for files, in deterministic file-name order.
///
/// Hidden entries (names starting with `.`) are skipped together with their
/// contents. Files directly inside `root` or nested deeper than one folder are
/// still reported; the indexer decides what matches.
///
/// Symbolic links are followed and reported under the link's own path.
/// Dangling links and links that loop back to an ancestor are skipped with a
/// warning.
///
/// Returns an error if `root` or one of its sub-directories cannot be read.
pub fn scan_works_dir(root: &Path, works_dir_name: &str) -> Result<Vec<DiscoveredAsset>> {
    let mut assets = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_broken_link(&err) => {
                warn!("Skipping unreadable link: {}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let mut path = works_dir_name.to_string();
        for component in relative.components() {
            path.push('/');
            path.push_str(&component.as_os_str().to_string_lossy());
        }

        assets.push(DiscoveredAsset {
            path,
            file: entry.into_path(),
        });
    }

    Ok(assets)
}

fn is_broken_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && (err.loop_ancestor().is_some()
            || err
                .io_error()
                .is_some_and(|io| io.kind() == ErrorKind::NotFound))
}

/// The root itself is never treated as hidden (temp dirs often start with `.`).
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
