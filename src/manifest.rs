//! Order manifest loading and lookups.
//!
//! The manifest (`order.json`) maps each category to the ordered list of
//! entries that must exist as files under that category:
//!
//! ```json
//! {
//!   "guides": ["setup", "install/linux"],
//!   "reference": ["cli"]
//! }
//! ```
//!
//! Category order follows the key order of the document and entry order
//! follows list order. A repeated key keeps its first position and takes the
//! last value.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::{DocOrderError, Result};

/// One category of the manifest and its ordered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name, which is also the top-level directory name.
    pub name: String,
    /// Entry names in manifest order.
    pub entries: Vec<String>,
}

/// Parsed order manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderManifest {
    categories: Vec<Category>,
}

impl OrderManifest {
    /// Build a manifest from `(category, entries)` pairs, in order.
    pub fn from_categories<I, S, E>(categories: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<E>)>,
        S: Into<String>,
        E: Into<String>,
    {
        let mut manifest = Self::default();
        for (name, entries) in categories {
            manifest.insert(name.into(), entries.into_iter().map(Into::into).collect());
        }
        manifest
    }

    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DocOrderError::ManifestNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                let err = anyhow::Error::new(e)
                    .context(format!("Failed to read manifest {}", path.display()));
                return Err(err.into());
            }
        };

        Self::parse(&content, path)
    }

    /// Parse manifest text. `source_path` is used for error reporting only.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| DocOrderError::ManifestParse {
            path: source_path.to_path_buf(),
            source: anyhow::Error::new(e),
        })
    }

    fn insert(&mut self, name: String, entries: Vec<String>) {
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.entries = entries,
            None => self.categories.push(Category { name, entries }),
        }
    }

    /// Categories in manifest order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Entries listed for `category`. An unknown category has no entries.
    pub fn entries(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `entry` is listed under `category`.
    pub fn contains(&self, category: &str, entry: &str) -> bool {
        self.entries(category).iter().any(|e| e == entry)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the manifest has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

impl<'de> Deserialize<'de> for OrderManifest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = OrderManifest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category names to lists of entries")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<OrderManifest, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut manifest = OrderManifest::default();
                while let Some((name, entries)) = map.next_entry::<String, Vec<String>>()? {
                    manifest.insert(name, entries);
                }
                Ok(manifest)
            }
        }

        deserializer.deserialize_map(ManifestVisitor)
    }
}
