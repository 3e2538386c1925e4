//! docorder - Keep a documentation tree and its order manifest in sync.
//!
//! A documentation root holds category directories of markdown pages and an
//! `order.json` manifest listing, per category, the pages in reading order.
//! docorder checks that both describe the same set of pages and reports the
//! first mismatch as a corrective instruction.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading from `.docorder.yml` and flags
//! - [`entry`] - File path and manifest entry conversions
//! - [`error`] - Error types and result aliases
//! - [`files`] - Documentation file enumeration
//! - [`manifest`] - Order manifest parsing and lookups
//! - [`report`] - Outcome formatting
//! - [`ui`] - Terminal output
//! - [`verify`] - The consistency check
//!
//! # Example
//!
//! ```
//! use docorder::files::FileSet;
//! use docorder::manifest::OrderManifest;
//! use docorder::verify::check_consistency;
//! use std::path::Path;
//!
//! let manifest = OrderManifest::parse(r#"{"guides": ["setup"]}"#, Path::new("order.json")).unwrap();
//! let files = FileSet::new();
//!
//! let violation = check_consistency(&manifest, &files, "order.json").unwrap_err();
//! assert_eq!(violation.action(), "remove");
//! ```
//!
//! For on-disk checks, see [`verify::verify`] and the integration tests.

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod files;
pub mod manifest;
pub mod report;
pub mod ui;
pub mod verify;

pub use error::{DocOrderError, Result, Violation};
