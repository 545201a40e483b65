// SPDX-License-Identifier: MPL-2.0
//! `folio_index` turns a portfolio's `works/` asset folders into an ordered,
//! read-only index of works.
//!
//! Each folder `<order>_<name>` becomes one work with a cover, an optional
//! cover background and a gallery in which SVG overlays are paired with
//! same-named rasters. The index answers the queries a portfolio site needs
//! (grid, navigation, detail page, "other works") and can be exported as a
//! JSON manifest.
//!
//! ```
//! use folio_index::indexer::build_index;
//!
//! let index = build_index([
//!     ("works/2_B/a.png", ()),
//!     ("works/10_A/a.png", ()),
//!     ("works/1_C/a.png", ()),
//! ]);
//! let order: Vec<_> = index.list_all().iter().map(|w| w.slug.as_str()).collect();
//! assert_eq!(order, ["1_C", "2_B", "10_A"]);
//! ```

pub mod asset_path;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod indexer;
pub mod manifest;
pub mod natural_sort;
pub mod paths;
pub mod routing;
pub mod works_index;

pub use domain::{DisplayImage, ImageAsset, NavItem, Work};
pub use indexer::{build_index, IndexOptions, WorksIndexer};
pub use works_index::{IndexStats, WorksIndex};
