//! Documentation file enumeration.
//!
//! This module provides:
//! - [`FileSet`] - the enumerated relative paths, in enumeration order
//! - [`FileEnumerator`] - the seam the verifier uses to obtain a [`FileSet`]
//! - [`GlobEnumerator`] - walks a root directory and keeps paths matching a glob
//!
//! Paths in a [`FileSet`] are relative to the root and use the platform
//! separator.

use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use walkdir::{DirEntry, WalkDir};

use crate::entry;
use crate::error::{DocOrderError, Result};

/// Default pattern for documentation pages.
pub const DEFAULT_PATTERN: &str = "*/**/*.md";

/// Directory names skipped by default.
pub const DEFAULT_IGNORE: &[&str] = &["node_modules"];

/// Relative file paths in enumeration order, with constant-time membership.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<String>,
    index: HashSet<String>,
}

impl FileSet {
    /// Create an empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Duplicates are ignored.
    pub fn insert(&mut self, file: impl Into<String>) {
        let file = file.into();
        if self.index.insert(file.clone()) {
            self.files.push(file);
        }
    }

    /// Whether `file` was enumerated.
    pub fn contains(&self, file: &str) -> bool {
        self.index.contains(file)
    }

    /// Paths in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no paths were enumerated.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FileSet::new();
        for file in iter {
            set.insert(file);
        }
        set
    }
}

/// Supplies the set of documentation files under a root directory.
pub trait FileEnumerator: Send + Sync {
    /// Enumerate files relative to `root`.
    fn enumerate(&self, root: &Path) -> Result<FileSet>;
}

/// A fixed file set enumerates to itself, regardless of root.
impl FileEnumerator for FileSet {
    fn enumerate(&self, _root: &Path) -> Result<FileSet> {
        Ok(self.clone())
    }
}

/// Enumerates files by walking the root and matching a glob pattern.
///
/// Directories whose name matches an ignore pattern are pruned at any
/// depth, as are hidden entries (names starting with `.`). Entries are
/// visited in file-name order so enumeration is deterministic.
#[derive(Debug, Clone)]
pub struct GlobEnumerator {
    pattern: String,
    matcher: GlobMatcher,
    ignore: GlobSet,
}

impl GlobEnumerator {
    /// Compile an enumerator for `pattern`, skipping directories named in `ignore`.
    ///
    /// The pattern must select markdown pages, since entry names are derived
    /// by stripping the `.md` extension.
    pub fn new<S: AsRef<str>>(pattern: &str, ignore: &[S]) -> Result<Self> {
        if !pattern.ends_with(entry::EXTENSION) {
            return Err(DocOrderError::InvalidPattern {
                pattern: pattern.to_string(),
                message: format!("pattern must select '{}' files", entry::EXTENSION),
            });
        }

        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| invalid_pattern(pattern, e))?
            .compile_matcher();

        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
            ignore: compile_ignore(ignore)?,
        })
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            return true;
        }
        entry.file_type().is_dir() && self.ignore.is_match(name)
    }
}

impl FileEnumerator for GlobEnumerator {
    fn enumerate(&self, root: &Path) -> Result<FileSet> {
        let mut files = FileSet::new();

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_pruned(e));

        for entry in walker {
            let entry = entry.map_err(|e| DocOrderError::Walk {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: anyhow::Error::new(e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if !self.matcher.is_match(relative) {
                continue;
            }

            let file = relative.to_str().ok_or_else(|| DocOrderError::Walk {
                path: entry.path().to_path_buf(),
                source: anyhow::anyhow!("path is not valid UTF-8"),
            })?;
            files.insert(file);
        }

        tracing::debug!(
            "Enumerated {} file(s) matching '{}' under {}",
            files.len(),
            self.pattern,
            root.display()
        );
        Ok(files)
    }
}

fn compile_ignore<S: AsRef<str>>(ignore: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for name in ignore {
        let name = name.as_ref();
        builder.add(Glob::new(name).map_err(|e| invalid_pattern(name, e))?);
    }
    builder.build().map_err(|e| {
        let names: Vec<&str> = ignore.iter().map(AsRef::as_ref).collect();
        invalid_pattern(&names.join(", "), e)
    })
}

fn invalid_pattern(pattern: &str, err: globset::Error) -> DocOrderError {
    DocOrderError::InvalidPattern {
        pattern: pattern.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::MAIN_SEPARATOR_STR;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# page\n").unwrap();
    }

    fn native(path: &str) -> String {
        path.replace('/', MAIN_SEPARATOR_STR)
    }

    fn enumerate(root: &Path) -> Vec<String> {
        GlobEnumerator::new(DEFAULT_PATTERN, DEFAULT_IGNORE)
            .unwrap()
            .enumerate(root)
            .unwrap()
            .iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn file_set_ignores_duplicates_and_keeps_order() {
        let set: FileSet = ["b.md", "a.md", "b.md"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b.md", "a.md"]);
        assert!(set.contains("a.md"));
        assert!(!set.contains("c.md"));
    }

    #[test]
    fn file_set_enumerates_to_itself() {
        let set: FileSet = ["guides/setup.md"].into_iter().collect();
        let enumerated = set.enumerate(Path::new("/nowhere")).unwrap();
        assert!(enumerated.contains("guides/setup.md"));
    }

    #[test]
    fn matches_markdown_below_a_category() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "guides/setup.md");
        touch(temp.path(), "guides/install/linux.md");
        touch(temp.path(), "README.md");
        touch(temp.path(), "guides/notes.txt");

        assert_eq!(
            enumerate(temp.path()),
            vec![native("guides/install/linux.md"), native("guides/setup.md")]
        );
    }

    #[test]
    fn skips_ignored_directories_at_any_depth() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "node_modules/pkg/readme.md");
        touch(temp.path(), "guides/node_modules/dep.md");
        touch(temp.path(), "guides/setup.md");

        assert_eq!(enumerate(temp.path()), vec![native("guides/setup.md")]);
    }

    #[test]
    fn skips_hidden_entries() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".github/template.md");
        touch(temp.path(), "guides/.draft.md");
        touch(temp.path(), "guides/setup.md");

        assert_eq!(enumerate(temp.path()), vec![native("guides/setup.md")]);
    }

    #[test]
    fn enumeration_is_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b/z.md");
        touch(temp.path(), "a/y.md");
        touch(temp.path(), "b/a.md");

        assert_eq!(
            enumerate(temp.path()),
            vec![native("a/y.md"), native("b/a.md"), native("b/z.md")]
        );
    }

    #[test]
    fn custom_ignore_list() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "guides/setup.md");
        touch(temp.path(), "drafts/wip.md");

        let enumerator = GlobEnumerator::new(DEFAULT_PATTERN, &["drafts"]).unwrap();
        let files = enumerator.enumerate(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.contains(&native("guides/setup.md")));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = GlobEnumerator::new("guides/[", DEFAULT_IGNORE).unwrap_err();
        assert!(matches!(err, DocOrderError::InvalidPattern { .. }));
    }

    #[test]
    fn non_markdown_pattern_is_rejected() {
        let err = GlobEnumerator::new("*/**/*.mdx", DEFAULT_IGNORE).unwrap_err();
        match err {
            DocOrderError::InvalidPattern { pattern, message } => {
                assert_eq!(pattern, "*/**/*.mdx");
                assert!(message.contains(".md"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(GlobEnumerator::new("guides/**/*.md", DEFAULT_IGNORE).is_ok());
    }

    #[test]
    fn invalid_ignore_glob_names_the_ignore_entry() {
        let err = GlobEnumerator::new(DEFAULT_PATTERN, &["node_modules", "drafts/["]).unwrap_err();
        match err {
            DocOrderError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "drafts/["),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_path_outside_pattern_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "guides/setup.md");
        let assets = temp.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join(OsStr::from_bytes(b"logo\xff.png")), b"").unwrap();

        assert_eq!(enumerate(temp.path()), vec![native("guides/setup.md")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_markdown_path_is_walk_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let guides = temp.path().join("guides");
        fs::create_dir_all(&guides).unwrap();
        fs::write(guides.join(OsStr::from_bytes(b"caf\xe9.md")), b"").unwrap();

        let err = GlobEnumerator::new(DEFAULT_PATTERN, DEFAULT_IGNORE)
            .unwrap()
            .enumerate(temp.path())
            .unwrap_err();
        assert!(matches!(err, DocOrderError::Walk { .. }));
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert_eq!(cause, "path is not valid UTF-8");
    }

    #[test]
    fn missing_root_is_walk_error() {
        let temp = TempDir::new().unwrap();
        let err = GlobEnumerator::new(DEFAULT_PATTERN, DEFAULT_IGNORE)
            .unwrap()
            .enumerate(&temp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, DocOrderError::Walk { .. }));
        assert!(!err.is_content_violation());
    }
}
