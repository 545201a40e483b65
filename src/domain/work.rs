// SPDX-License-Identifier: MPL-2.0
//! Portfolio work types.
//!
//! These types are pure data: the asset handle `H` is whatever the discovery
//! side hands over (a URL, a path, a bundler id) and is never inspected.

use serde::Serialize;

/// A single discovered image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset<H> {
    /// File name including its extension.
    pub name: String,
    /// Opaque resource reference.
    pub url: H,
    /// Whether the file extension is `svg` (case-insensitive).
    pub is_svg: bool,
}

impl<H> ImageAsset<H> {
    /// File name with its last extension removed.
    ///
    /// ```
    /// use folio_index::domain::ImageAsset;
    ///
    /// let asset = ImageAsset { name: "cover.svg".to_string(), url: (), is_svg: true };
    /// assert_eq!(asset.base_name(), "cover");
    /// ```
    #[must_use]
    pub fn base_name(&self) -> &str {
        crate::asset_path::strip_extension(&self.name)
    }

    /// Lower-cased base name, the key used for SVG/raster pairing.
    #[must_use]
    pub fn pairing_key(&self) -> String {
        self.base_name().to_lowercase()
    }
}

/// One item of a work's detail gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DisplayImage<H> {
    /// Raster image shown on its own.
    Image(ImageAsset<H>),
    /// Vector image shown on its own.
    Svg(ImageAsset<H>),
    /// Vector overlay drawn on top of a raster sharing its base name.
    InteractivePair {
        foreground: ImageAsset<H>,
        background: ImageAsset<H>,
    },
}

impl<H> DisplayImage<H> {
    /// Wraps an asset in the single-item variant matching its type.
    #[must_use]
    pub fn single(asset: ImageAsset<H>) -> Self {
        if asset.is_svg {
            DisplayImage::Svg(asset)
        } else {
            DisplayImage::Image(asset)
        }
    }

    /// Name of the item: the file name, or the shared base name for pairs.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            DisplayImage::Image(asset) | DisplayImage::Svg(asset) => &asset.name,
            DisplayImage::InteractivePair { foreground, .. } => foreground.base_name(),
        }
    }

    /// Returns true for the overlay variant.
    #[must_use]
    pub fn is_interactive_pair(&self) -> bool {
        matches!(self, DisplayImage::InteractivePair { .. })
    }

    /// All raw assets referenced by this item.
    pub fn assets(&self) -> impl Iterator<Item = &ImageAsset<H>> {
        let (first, second) = match self {
            DisplayImage::Image(asset) | DisplayImage::Svg(asset) => (asset, None),
            DisplayImage::InteractivePair {
                foreground,
                background,
            } => (foreground, Some(background)),
        };
        std::iter::once(first).chain(second)
    }
}

/// One portfolio project, backed by one source folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Work<H> {
    /// Folder name; unique key and route parameter.
    pub slug: String,
    /// Text before the first underscore; only ever compared.
    pub order: String,
    /// Display name derived from the folder name.
    pub name: String,
    pub cover: Option<ImageAsset<H>>,
    /// Raster drawn under an SVG cover, when one shares its base name.
    pub cover_background: Option<ImageAsset<H>>,
    pub images: Vec<DisplayImage<H>>,
}

impl<H> Work<H> {
    #[must_use]
    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    /// Navigation projection of this work.
    #[must_use]
    pub fn nav_item(&self) -> NavItem {
        NavItem {
            order: self.order.clone(),
            slug: self.slug.clone(),
            name: self.name.clone(),
        }
    }
}

/// Entry of the site navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub order: String,
    pub slug: String,
    pub name: String,
}
