//! Settings loading.
//!
//! docorder runs without any configuration. A `.docorder.yml` file at the
//! documentation root can change the manifest location, the file pattern,
//! the ignored directories and the output format:
//!
//! ```yaml
//! manifest: order.json
//! pattern: "*/**/*.md"
//! ignore: [node_modules]
//! format: human
//! ```
//!
//! Command-line flags override the file.

pub mod loader;
pub mod schema;

pub use loader::{find_config_file, load_config_file, load_settings, parse_config, CONFIG_FILE};
pub use schema::{OutputFormat, Settings, SettingsOverrides, DEFAULT_MANIFEST};
