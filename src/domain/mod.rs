// SPDX-License-Identifier: MPL-2.0
//! Domain types shared by the indexer, the queries and the manifest.

pub mod newtypes;
pub mod work;

pub use newtypes::OtherWorksLimit;
pub use work::{DisplayImage, ImageAsset, NavItem, Work};
