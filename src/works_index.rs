// SPDX-License-Identifier: MPL-2.0
//! Read-only queries over a built works index.
//!
//! The index is constructed once by [`crate::indexer::WorksIndexer`] and never
//! mutated afterwards. Every query is pure: an unknown slug yields `None` or an
//! empty result, never an error.

use crate::domain::{DisplayImage, NavItem, Work};
use serde::Serialize;
use std::collections::HashMap;

/// Counters gathered while building the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Number of works (folders) in the index.
    pub works: usize,
    /// Number of image assets recorded across all works.
    pub assets: usize,
    /// Paths that did not match `.../works/<folder>/<file>`.
    pub skipped_paths: usize,
    /// Files inside a work folder whose extension is not an image type.
    pub unsupported_files: usize,
}

/// Immutable, ordered collection of works.
#[derive(Debug, Clone)]
pub struct WorksIndex<H> {
    works: Vec<Work<H>>,
    /// Slug to position in `works`.
    slugs: HashMap<String, usize>,
    /// Positions of works that have a cover, in index order.
    with_covers: Vec<usize>,
    stats: IndexStats,
}

impl<H> WorksIndex<H> {
    /// Wraps already-sorted works. Slugs are expected to be unique.
    pub(crate) fn new(works: Vec<Work<H>>, stats: IndexStats) -> Self {
        let slugs = works
            .iter()
            .enumerate()
            .map(|(idx, work)| (work.slug.clone(), idx))
            .collect();
        let with_covers = works
            .iter()
            .enumerate()
            .filter(|(_, work)| work.has_cover())
            .map(|(idx, _)| idx)
            .collect();

        Self {
            works,
            slugs,
            with_covers,
            stats,
        }
    }

    /// All works, sorted by order.
    #[must_use]
    pub fn list_all(&self) -> &[Work<H>] {
        &self.works
    }

    /// Works that have a cover, in index order.
    #[must_use]
    pub fn list_with_covers(&self) -> Vec<&Work<H>> {
        self.covered().collect()
    }

    /// Navigation entries for every work with a cover.
    #[must_use]
    pub fn navigation_items(&self) -> Vec<NavItem> {
        self.covered().map(Work::nav_item).collect()
    }

    /// Looks up a work by its folder name.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Work<H>> {
        self.slugs.get(slug).map(|&idx| &self.works[idx])
    }

    /// Detail gallery of a work; empty when the slug is unknown.
    #[must_use]
    pub fn detail_images(&self, slug: &str) -> &[DisplayImage<H>] {
        self.find_by_slug(slug)
            .map(|work| work.images.as_slice())
            .unwrap_or_default()
    }

    /// Up to `limit` works with covers, skipping `current_slug`.
    #[must_use]
    pub fn other_works(&self, current_slug: &str, limit: usize) -> Vec<&Work<H>> {
        self.covered()
            .filter(|work| work.slug != current_slug)
            .take(limit)
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.works.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    fn covered(&self) -> impl Iterator<Item = &Work<H>> {
        self.with_covers.iter().map(|&idx| &self.works[idx])
    }
}

impl<H> Default for WorksIndex<H> {
    fn default() -> Self {
        Self::new(Vec::new(), IndexStats::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageAsset;

    fn work(slug: &str, with_cover: bool) -> Work<()> {
        let (order, _) = slug.split_once('_').unwrap_or((slug, ""));
        Work {
            slug: slug.to_string(),
            order: order.to_string(),
            name: slug.to_string(),
            cover: with_cover.then(|| ImageAsset {
                name: "cover.png".to_string(),
                url: (),
                is_svg: false,
            }),
            cover_background: None,
            images: vec![DisplayImage::Image(ImageAsset {
                name: "shot.png".to_string(),
                url: (),
                is_svg: false,
            })],
        }
    }

    fn sample_index() -> WorksIndex<()> {
        WorksIndex::new(
            vec![
                work("01_A", true),
                work("02_B", false),
                work("03_C", true),
                work("04_D", true),
                work("05_E", true),
            ],
            IndexStats::default(),
        )
    }

    fn slugs<'a>(works: impl IntoIterator<Item = &'a Work<()>>) -> Vec<&'a str> {
        works.into_iter().map(|w| w.slug.as_str()).collect()
    }

    #[test]
    fn list_with_covers_excludes_coverless_works() {
        let index = sample_index();
        assert_eq!(index.list_all().len(), 5);
        assert_eq!(
            slugs(index.list_with_covers()),
            vec!["01_A", "03_C", "04_D", "05_E"]
        );
    }

    #[test]
    fn navigation_items_follow_list_with_covers() {
        let index = sample_index();
        let orders: Vec<_> = index
            .navigation_items()
            .into_iter()
            .map(|item| item.order)
            .collect();
        assert_eq!(orders, vec!["01", "03", "04", "05"]);
    }

    #[test]
    fn find_by_slug_is_consistent_with_list_all() {
        let index = sample_index();
        for work in index.list_all() {
            assert_eq!(index.find_by_slug(&work.slug), Some(work));
        }
        assert!(index.find_by_slug("99_Missing").is_none());
    }

    #[test]
    fn detail_images_of_unknown_slug_is_empty() {
        let index = sample_index();
        assert_eq!(index.detail_images("01_A").len(), 1);
        assert!(index.detail_images("nope").is_empty());
    }

    #[test]
    fn other_works_skips_current_and_respects_limit() {
        let index = sample_index();
        assert_eq!(
            slugs(index.other_works("03_C", 3)),
            vec!["01_A", "04_D", "05_E"]
        );
        assert_eq!(slugs(index.other_works("01_A", 2)), vec!["03_C", "04_D"]);
        assert!(index.other_works("01_A", 0).is_empty());
    }

    #[test]
    fn other_works_returns_fewer_when_short() {
        let index = WorksIndex::new(
            vec![work("01_A", true), work("02_B", true)],
            IndexStats::default(),
        );
        assert_eq!(slugs(index.other_works("01_A", 3)), vec!["02_B"]);
        assert_eq!(
            slugs(index.other_works("unknown", 3)),
            vec!["01_A", "02_B"]
        );
    }

    #[test]
    fn default_index_is_empty() {
        let index: WorksIndex<()> = WorksIndex::default();
        assert!(index.is_empty());
        assert!(index.navigation_items().is_empty());
        assert_eq!(index.stats(), &IndexStats::default());
    }
}
