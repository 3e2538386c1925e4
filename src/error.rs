//! Error types for docorder operations.
//!
//! This module defines [`DocOrderError`], the primary error type used throughout
//! the crate, the [`Violation`] content errors, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! Errors fall into two tiers:
//!
//! - **Content violations** ([`DocOrderError::Violation`]) are mismatches between
//!   the documentation tree and the manifest. The fix is a manual edit, so they
//!   are reported as a single corrective line.
//! - **Infrastructure failures** (every other variant) mean the environment or
//!   the manifest syntax is broken. They are reported with the full cause chain.
//!
//! Use [`DocOrderError::is_content_violation`] to tell them apart.
//!
//! Variants that wrap a lower-level error hold it as an [`anyhow::Error`]
//! created where the failure happened, so [`DocOrderError::into_anyhow`]
//! can report the backtrace of that origin rather than of the reporter.

use std::path::PathBuf;
use thiserror::Error;

/// A mismatch between the files on disk and the order manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A markdown file exists but its entry is not listed under its category.
    #[error("Add {file} to {manifest}")]
    Unlisted { file: String, manifest: String },

    /// The manifest lists an entry whose file does not exist.
    #[error("Remove {file} from {manifest}")]
    Stale { file: String, manifest: String },
}

impl Violation {
    /// The offending file path, relative to the documentation root.
    pub fn file(&self) -> &str {
        match self {
            Violation::Unlisted { file, .. } | Violation::Stale { file, .. } => file,
        }
    }

    /// Short machine-readable name of the required action.
    pub fn action(&self) -> &'static str {
        match self {
            Violation::Unlisted { .. } => "add",
            Violation::Stale { .. } => "remove",
        }
    }
}

/// Core error type for docorder operations.
#[derive(Debug, Error)]
pub enum DocOrderError {
    /// The file tree and the manifest disagree.
    #[error(transparent)]
    Violation(#[from] Violation),

    /// Manifest file not found at the expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// The manifest is not well-formed.
    #[error("Malformed manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Failed to parse a `.docorder.yml` settings file.
    #[error("Failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A configured glob pattern does not compile.
    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Directory traversal failed while enumerating documentation files.
    #[error("Failed to enumerate files under {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocOrderError {
    /// Whether this error is a content violation rather than an
    /// infrastructure failure.
    pub fn is_content_violation(&self) -> bool {
        matches!(self, DocOrderError::Violation(_))
    }

    /// The violation carried by this error, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            DocOrderError::Violation(v) => Some(v),
            _ => None,
        }
    }

    /// Convert into an [`anyhow::Error`] for reporting.
    ///
    /// Wrapped sources keep the backtrace captured where they were created.
    pub fn into_anyhow(self) -> anyhow::Error {
        let message = self.to_string();
        match self {
            DocOrderError::ManifestParse { source, .. }
            | DocOrderError::ConfigParse { source, .. }
            | DocOrderError::Walk { source, .. } => source.context(message),
            DocOrderError::Other(err) => err,
            other => anyhow::Error::new(other),
        }
    }
}

/// Result type alias for docorder operations.
pub type Result<T> = std::result::Result<T, DocOrderError>;
