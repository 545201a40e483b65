// SPDX-License-Identifier: MPL-2.0
//! Where `folio-index` looks for `folio.toml`.
//!
//! The indexer runs from build scripts and CI as often as by hand, so the
//! config directory can be pinned per invocation. The first source that
//! yields a directory wins:
//!
//! 1. A path passed to [`get_app_config_dir_with_override`] (tests).
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`].
//! 3. The `FOLIO_INDEX_CONFIG_DIR` environment variable, when non-empty.
//! 4. `FolioIndex` under the platform config directory.
//!
//! `--config <FILE>` bypasses this lookup entirely.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "FolioIndex";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_INDEX_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/FolioIndex/`
/// - macOS: `~/Library/Application Support/FolioIndex/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\FolioIndex\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
