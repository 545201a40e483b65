// SPDX-License-Identifier: MPL-2.0
//! Groups a flat list of asset paths into ordered portfolio works.
//!
//! Input is any collection of `(path, handle)` pairs, in discovery order.
//! Paths follow `.../works/<folder>/<file>`; anything else is skipped without
//! error. For each folder the indexer:
//!
//! 1. picks a cover: the first file whose name starts with `cover`, otherwise
//!    the first file in natural name order;
//! 2. records a cover background when the cover is an SVG and a raster with the
//!    same base name exists (that raster stays in the gallery);
//! 3. sorts the remaining files naturally and collapses each SVG/raster pair
//!    sharing a base name into one interactive item.
//!
//! Works are then sorted by their order prefix.

use crate::asset_path::{
    self, has_allowed_extension, is_cover_name, parse_asset_path, parse_folder_name, FolderName,
};
use crate::domain::{DisplayImage, ImageAsset, Work};
use crate::natural_sort::natural_cmp;
use crate::works_index::{IndexStats, WorksIndex};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Rules applied while indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Path segment that holds the work folders.
    pub works_dir_name: String,
    /// Allowed image extensions, without the dot.
    pub extensions: Vec<String>,
    /// File name prefix marking an explicit cover.
    pub cover_prefix: String,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            works_dir_name: asset_path::WORKS_DIR_NAME.to_string(),
            extensions: asset_path::IMAGE_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            cover_prefix: asset_path::COVER_PREFIX.to_string(),
        }
    }
}

/// Builds [`WorksIndex`] values from discovered assets.
///
/// # Example
///
/// ```
/// use folio_index::indexer::WorksIndexer;
///
/// let index = WorksIndexer::new().build_index([
///     ("works/01_Logo/cover.svg", "/a/cover.svg"),
///     ("works/01_Logo/cover.png", "/a/cover.png"),
///     ("works/01_Logo/shot.png", "/a/shot.png"),
/// ]);
///
/// let work = index.find_by_slug("01_Logo").unwrap();
/// assert_eq!(work.cover.as_ref().unwrap().name, "cover.svg");
/// assert_eq!(work.cover_background.as_ref().unwrap().name, "cover.png");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorksIndexer {
    options: IndexOptions,
}

/// Assets of one folder, in discovery order.
struct FolderScratch<H> {
    slug: String,
    assets: Vec<ImageAsset<H>>,
}

impl WorksIndexer {
    /// Creates an indexer with the default layout and extensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: IndexOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Builds the index from `(path, handle)` pairs.
    pub fn build_index<H, P, I>(&self, entries: I) -> WorksIndex<H>
    where
        H: Clone,
        P: AsRef<str>,
        I: IntoIterator<Item = (P, H)>,
    {
        let mut folders: Vec<FolderScratch<H>> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut stats = IndexStats::default();

        for (path, handle) in entries {
            let path = path.as_ref();
            let Some(location) = parse_asset_path(path, &self.options.works_dir_name) else {
                debug!("Skipping path outside the works layout: {}", path);
                stats.skipped_paths += 1;
                continue;
            };

            let position = *positions
                .entry(location.folder.to_string())
                .or_insert_with(|| {
                    folders.push(FolderScratch {
                        slug: location.folder.to_string(),
                        assets: Vec::new(),
                    });
                    folders.len() - 1
                });

            if !has_allowed_extension(location.file, &self.options.extensions) {
                warn!("Ignoring non-image file in work folder: {}", path);
                stats.unsupported_files += 1;
                continue;
            }

            folders[position].assets.push(ImageAsset {
                name: location.file.to_string(),
                url: handle,
                is_svg: asset_path::is_svg(location.file),
            });
            stats.assets += 1;
        }

        let mut works: Vec<Work<H>> = folders
            .into_iter()
            .map(|folder| self.resolve_work(folder))
            .collect();
        works.sort_by(|a, b| {
            natural_cmp(&a.order, &b.order).then_with(|| natural_cmp(&a.slug, &b.slug))
        });
        stats.works = works.len();

        let coverless = works.iter().filter(|work| !work.has_cover()).count();
        if coverless > 0 {
            warn!("{} work folder(s) contain no images and have no cover", coverless);
        }
        info!(
            "Indexed {} works from {} assets ({} paths skipped, {} unsupported files)",
            stats.works, stats.assets, stats.skipped_paths, stats.unsupported_files
        );

        WorksIndex::new(works, stats)
    }

    fn resolve_work<H: Clone>(&self, folder: FolderScratch<H>) -> Work<H> {
        let FolderName { order, name } = parse_folder_name(&folder.slug);
        let mut assets = folder.assets;

        let cover = find_cover(&assets, &self.options.cover_prefix).map(|idx| assets.remove(idx));
        let cover_background = cover
            .as_ref()
            .filter(|cover| cover.is_svg)
            .and_then(|cover| {
                assets
                    .iter()
                    .find(|asset| !asset.is_svg && asset.base_name() == cover.base_name())
                    .cloned()
            });

        assets.sort_by(|a, b| natural_cmp(&a.name, &b.name));

        Work {
            slug: folder.slug,
            order,
            name,
            cover,
            cover_background,
            images: pair_display_images(assets),
        }
    }
}

/// Builds an index with [`IndexOptions::default`].
pub fn build_index<H, P, I>(entries: I) -> WorksIndex<H>
where
    H: Clone,
    P: AsRef<str>,
    I: IntoIterator<Item = (P, H)>,
{
    WorksIndexer::new().build_index(entries)
}

/// Explicit cover by discovery order, else the naturally-first file.
fn find_cover<H>(assets: &[ImageAsset<H>], prefix: &str) -> Option<usize> {
    assets
        .iter()
        .position(|asset| is_cover_name(&asset.name, prefix))
        .or_else(|| {
            (0..assets.len()).min_by(|&a, &b| natural_cmp(&assets[a].name, &assets[b].name))
        })
}

/// Turns sorted assets into display items, merging SVG/raster pairs.
///
/// A pair is emitted where its first member appears; the partner is consumed
/// and never emitted again.
fn pair_display_images<H>(assets: Vec<ImageAsset<H>>) -> Vec<DisplayImage<H>> {
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, asset) in assets.iter().enumerate() {
        groups.entry(asset.pairing_key()).or_default().push(idx);
    }

    let mut partners: Vec<Option<usize>> = vec![None; assets.len()];
    for members in groups.values() {
        if let [a, b] = members.as_slice() {
            if assets[*a].is_svg != assets[*b].is_svg {
                partners[*a] = Some(*b);
                partners[*b] = Some(*a);
            }
        }
    }

    let mut slots: Vec<Option<ImageAsset<H>>> = assets.into_iter().map(Some).collect();
    let mut images = Vec::with_capacity(slots.len());

    for idx in 0..slots.len() {
        let Some(asset) = slots[idx].take() else {
            continue;
        };
        let partner = partners[idx].and_then(|other| slots[other].take());

        images.push(match partner {
            Some(other) => {
                let (foreground, background) = if asset.is_svg {
                    (asset, other)
                } else {
                    (other, asset)
                };
                DisplayImage::InteractivePair {
                    foreground,
                    background,
                }
            }
            None => DisplayImage::single(asset),
        });
    }

    images
}
