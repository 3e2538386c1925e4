//! Manifest/file-tree consistency checking.
//!
//! [`check_consistency`] runs two passes and stops at the first mismatch:
//!
//! 1. Every enumerated file must be listed under its category.
//! 2. Every manifest entry must have a file.
//!
//! Files are scanned in enumeration order, then manifest entries in manifest
//! order, so the reported violation is deterministic for a given input.
//!
//! # Example
//!
//! ```
//! use docorder::files::FileSet;
//! use docorder::manifest::OrderManifest;
//! use docorder::verify::check_consistency;
//!
//! let manifest = OrderManifest::from_categories([("guides", vec!["setup"])]);
//! let files: FileSet = [docorder::entry::file_path("guides", "setup")].into_iter().collect();
//! assert!(check_consistency(&manifest, &files, "order.json").is_ok());
//! ```

use std::path::Path;

use crate::entry;
use crate::error::{DocOrderError, Result, Violation};
use crate::files::{FileEnumerator, FileSet};
use crate::manifest::OrderManifest;

/// Summary of a successful verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Number of manifest categories.
    pub categories: usize,
    /// Number of manifest entries.
    pub entries: usize,
    /// Number of enumerated files.
    pub files: usize,
}

/// Check that `files` and `manifest` describe the same pages.
///
/// `manifest_name` is only used in violation messages.
pub fn check_consistency(
    manifest: &OrderManifest,
    files: &FileSet,
    manifest_name: &str,
) -> std::result::Result<(), Violation> {
    tracing::debug!("Checking {} file(s) against manifest", files.len());
    for file in files.iter() {
        let listed = entry::entry_name(file)
            .is_some_and(|(category, name)| manifest.contains(category, &name));
        if !listed {
            return Err(Violation::Unlisted {
                file: file.to_string(),
                manifest: manifest_name.to_string(),
            });
        }
    }

    tracing::debug!(
        "Checking {} manifest entry(ies) against files",
        manifest.entry_count()
    );
    for category in manifest.categories() {
        for name in &category.entries {
            let file = entry::file_path(&category.name, name);
            if !files.contains(&file) {
                return Err(Violation::Stale {
                    file,
                    manifest: manifest_name.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Load the manifest and enumerate files under `root`, then check them.
///
/// Both inputs are loaded concurrently. If both fail, the manifest error is
/// reported.
pub fn verify(
    root: &Path,
    manifest_path: &Path,
    enumerator: &dyn FileEnumerator,
) -> Result<Report> {
    let (manifest, files) = std::thread::scope(|scope| {
        let files = scope.spawn(|| enumerator.enumerate(root));
        let manifest = OrderManifest::load(manifest_path);
        let files = files
            .join()
            .map_err(|_| DocOrderError::Other(anyhow::anyhow!("file enumeration panicked")));
        (manifest, files)
    });
    let manifest = manifest?;
    let files = files??;

    tracing::debug!(
        "Loaded manifest with {} categories from {}",
        manifest.len(),
        manifest_path.display()
    );

    check_consistency(&manifest, &files, &manifest_name(manifest_path))?;

    let report = Report {
        categories: manifest.len(),
        entries: manifest.entry_count(),
        files: files.len(),
    };
    tracing::info!(
        "{} file(s) match {} manifest entry(ies)",
        report.files,
        report.entries
    );
    Ok(report)
}

fn manifest_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
