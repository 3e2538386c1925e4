//! Settings definitions for docorder.
//!
//! This module contains the struct definitions that map to the optional
//! `.docorder.yml` file at the documentation root.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::files::{DEFAULT_IGNORE, DEFAULT_PATTERN};

/// Default manifest file name, relative to the root.
pub const DEFAULT_MANIFEST: &str = "order.json";

/// Root settings structure for `.docorder.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Manifest path (relative to the root)
    pub manifest: PathBuf,

    /// Glob pattern selecting documentation files
    pub pattern: String,

    /// Directory names to skip while enumerating
    pub ignore: Vec<String>,

    /// Output format: human, json
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            pattern: DEFAULT_PATTERN.to_string(),
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            format: OutputFormat::default(),
        }
    }
}

/// How results are rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One styled line per outcome
    #[default]
    Human,
    /// One JSON object per run
    Json,
}

/// Values supplied on the command line or through the environment.
///
/// `None` leaves the file or default value in place.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub manifest: Option<PathBuf>,
    pub pattern: Option<String>,
    pub ignore: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Apply command-line overrides on top of these settings.
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        if let Some(manifest) = &overrides.manifest {
            self.manifest = manifest.clone();
        }
        if let Some(pattern) = &overrides.pattern {
            self.pattern = pattern.clone();
        }
        if let Some(ignore) = &overrides.ignore {
            self.ignore = ignore.clone();
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }
}
