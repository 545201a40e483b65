// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Scan**: works layout, cover prefix and image extensions
//! - **Manifest**: asset URL prefix and JSON formatting
//! - **Display**: router base path and "other works" strip size

pub use crate::asset_path::{COVER_PREFIX as DEFAULT_COVER_PREFIX, IMAGE_EXTENSIONS};
pub use crate::asset_path::WORKS_DIR_NAME as DEFAULT_WORKS_DIR_NAME;

// ==========================================================================
// Manifest Defaults
// ==========================================================================

/// URL prefix prepended to `works/<folder>/<file>` in the manifest.
pub const DEFAULT_BASE_URL: &str = "/assets";

/// Whether the manifest is pretty-printed.
pub const DEFAULT_PRETTY_MANIFEST: bool = true;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Path the site is served under.
pub const DEFAULT_ROUTER_BASE: &str = "/";

/// Number of other works shown under a work detail page.
pub const DEFAULT_OTHER_WORKS_LIMIT: usize = 3;

/// Minimum number of other works.
pub const MIN_OTHER_WORKS_LIMIT: usize = 1;

/// Maximum number of other works.
pub const MAX_OTHER_WORKS_LIMIT: usize = 12;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_OTHER_WORKS_LIMIT > 0);
    assert!(MAX_OTHER_WORKS_LIMIT >= MIN_OTHER_WORKS_LIMIT);
    assert!(DEFAULT_OTHER_WORKS_LIMIT >= MIN_OTHER_WORKS_LIMIT);
    assert!(DEFAULT_OTHER_WORKS_LIMIT <= MAX_OTHER_WORKS_LIMIT);
};
