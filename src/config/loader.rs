//! Settings file discovery and loading.
//!
//! Settings are layered, later layers overriding earlier ones:
//! 1. Built-in defaults
//! 2. `.docorder.yml` at the root, or the file passed with `--config`
//! 3. Command-line flags and environment variables

use crate::config::schema::{Settings, SettingsOverrides};
use crate::error::{DocOrderError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name looked up at the root.
pub const CONFIG_FILE: &str = ".docorder.yml";

/// Find the settings file for `root`, if one exists.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a settings file.
///
/// # Errors
///
/// Returns `ConfigParse` if the file is not valid settings YAML.
pub fn load_config_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        let err = anyhow::Error::new(e).context(format!("Failed to read {}", path.display()));
        DocOrderError::Other(err)
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| DocOrderError::ConfigParse {
        path: source_path.to_path_buf(),
        source: anyhow::Error::new(e),
    })
}

/// Resolve the effective settings for `root`.
///
/// If `config_override` is provided, that file is loaded instead of the
/// discovered one and must exist.
pub fn load_settings(
    root: &Path,
    config_override: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<Settings> {
    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(root),
    };

    let settings = match path {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            load_config_file(&path)?
        }
        None => Settings::default(),
    };

    Ok(settings.with_overrides(overrides))
}
