//! Conversions between documentation file paths and manifest entries.
//!
//! A file `guides/install/linux.md` belongs to category `guides` and has the
//! entry name `install/linux`. Entry names always use `/`, while file paths
//! use the platform separator.

use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// File extension of documentation pages, including the dot.
pub const EXTENSION: &str = ".md";

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Split a relative file path into its category and the remainder.
///
/// Returns `None` when the path has no separator and therefore no category.
pub fn split_category(file: &str) -> Option<(&str, &str)> {
    file.split_once(is_separator)
}

/// Derive the `(category, entry)` pair for a relative file path.
///
/// Returns `None` if the path has no category or does not end in `.md`.
pub fn entry_name(file: &str) -> Option<(&str, String)> {
    let (category, rest) = split_category(file)?;
    let stem = rest.strip_suffix(EXTENSION)?;
    Some((category, stem.replace(MAIN_SEPARATOR, "/")))
}

/// Reconstruct the relative file path a manifest entry refers to.
pub fn file_path(category: &str, entry: &str) -> String {
    let mut path = String::with_capacity(category.len() + entry.len() + 1 + EXTENSION.len());
    path.push_str(category);
    path.push(MAIN_SEPARATOR);
    path.push_str(&entry.replace('/', MAIN_SEPARATOR_STR));
    path.push_str(EXTENSION);
    path
}
