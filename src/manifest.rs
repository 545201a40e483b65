// SPDX-License-Identifier: MPL-2.0
//! JSON manifest export.
//!
//! The manifest is what a presentation layer loads instead of globbing the
//! asset folders itself: the ordered works, the navigation entries and the
//! counters gathered while indexing. Field names are camelCase and gallery
//! items carry a `kind` tag (`image`, `svg` or `interactive-pair`).

use crate::domain::{NavItem, Work};
use crate::error::Result;
use crate::works_index::{IndexStats, WorksIndex};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializable snapshot of an index.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest<'a, H> {
    /// Version of the tool that produced the manifest.
    pub version: &'static str,
    pub works: &'a [Work<H>],
    pub navigation: Vec<NavItem>,
    pub stats: IndexStats,
}

impl<'a, H> Manifest<'a, H> {
    #[must_use]
    pub fn from_index(index: &'a WorksIndex<H>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            works: index.list_all(),
            navigation: index.navigation_items(),
            stats: *index.stats(),
        }
    }
}

/// Renders the manifest of `index` as JSON.
pub fn to_json<H: Serialize>(index: &WorksIndex<H>, pretty: bool) -> Result<String> {
    let manifest = Manifest::from_index(index);
    let json = if pretty {
        serde_json::to_string_pretty(&manifest)?
    } else {
        serde_json::to_string(&manifest)?
    };
    Ok(json)
}

/// Writes the manifest to `path`, creating parent directories as needed.
pub fn write_manifest<H: Serialize>(
    path: &Path,
    index: &WorksIndex<H>,
    pretty: bool,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut json = to_json(index, pretty)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Joins a URL prefix and a logical asset path with exactly one `/`.
///
/// ```
/// use folio_index::manifest::asset_url;
///
/// assert_eq!(asset_url("/assets/", "works/01_A/a.png"), "/assets/works/01_A/a.png");
/// assert_eq!(asset_url("", "works/01_A/a.png"), "/works/01_A/a.png");
/// ```
#[must_use]
pub fn asset_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
