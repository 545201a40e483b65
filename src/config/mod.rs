// SPDX-License-Identifier: MPL-2.0
//! This module handles the indexer's configuration, loaded from a
//! `folio.toml` file.
//!
//! # Configuration Sections
//!
//! - `[scan]` - Works directory name, cover prefix and image extensions
//! - `[manifest]` - Asset URL prefix and JSON formatting
//! - `[display]` - Router base path and "other works" strip size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `FOLIO_INDEX_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_index::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let options = config.index_options();
//! assert_eq!(options.works_dir_name, "works");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::OtherWorksLimit;
use crate::error::{Error, Result};
use crate::indexer::IndexOptions;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "folio.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// How assets are discovered and classified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Directory segment holding one folder per work.
    #[serde(default = "default_works_dir_name")]
    pub works_dir_name: String,

    /// File name prefix marking an explicit cover.
    #[serde(default = "default_cover_prefix")]
    pub cover_prefix: String,

    /// Image extensions to index (without dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            works_dir_name: default_works_dir_name(),
            cover_prefix: default_cover_prefix(),
            extensions: default_extensions(),
        }
    }
}

/// Manifest output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestConfig {
    /// Prefix for asset URLs written to the manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_pretty")]
    pub pretty: Option<bool>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            pretty: default_pretty(),
        }
    }
}

/// Settings consumed by the presentation side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Base path the site is deployed under (e.g. `/portfolio/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_base: Option<String>,

    #[serde(default = "default_other_works_limit")]
    pub other_works_limit: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            router_base: None,
            other_works_limit: default_other_works_limit(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Indexer rules derived from the `[scan]` section.
    #[must_use]
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            works_dir_name: self.scan.works_dir_name.clone(),
            extensions: self.scan.extensions.clone(),
            cover_prefix: self.scan.cover_prefix.clone(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.manifest.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn pretty_manifest(&self) -> bool {
        self.manifest.pretty.unwrap_or(DEFAULT_PRETTY_MANIFEST)
    }

    #[must_use]
    pub fn router_base(&self) -> &str {
        self.display
            .router_base
            .as_deref()
            .unwrap_or(DEFAULT_ROUTER_BASE)
    }

    #[must_use]
    pub fn other_works_limit(&self) -> OtherWorksLimit {
        self.display
            .other_works_limit
            .map(OtherWorksLimit::new)
            .unwrap_or_default()
    }
}

fn default_works_dir_name() -> String {
    DEFAULT_WORKS_DIR_NAME.to_string()
}

fn default_cover_prefix() -> String {
    DEFAULT_COVER_PREFIX.to_string()
}

fn default_extensions() -> Vec<String> {
    IMAGE_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_pretty() -> Option<bool> {
    Some(DEFAULT_PRETTY_MANIFEST)
}

fn default_other_works_limit() -> Option<usize> {
    Some(DEFAULT_OTHER_WORKS_LIMIT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return load_or_default(&path);
        }
    }
    (Config::default(), None)
}

/// Loads a specific file, falling back to defaults with a warning on failure.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Could not load {}, using defaults: {}",
                path.display(),
                err
            )),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
