//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{OutputFormat, SettingsOverrides};

/// docorder - Check that docs and their order manifest list the same pages.
#[derive(Debug, Parser)]
#[command(name = "docorder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Documentation root (defaults to the current directory)
    #[arg(short, long, global = true, env = "DOCORDER_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to settings file (overrides <root>/.docorder.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Manifest path, relative to the root [default: order.json]
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Glob selecting documentation files [default: */**/*.md]
    #[arg(long, global = true)]
    pub pattern: Option<String>,

    /// Directory names to skip (comma-separated) [default: node_modules]
    #[arg(long, global = true, value_delimiter = ',')]
    pub ignore: Option<Vec<String>>,

    /// Output format [default: human]
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also report success
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print nothing; only the exit status reports the result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            manifest: self.manifest.clone(),
            pattern: self.pattern.clone(),
            ignore: self.ignore.as_ref().map(|names| {
                names
                    .iter()
                    .filter(|name| !name.is_empty())
                    .cloned()
                    .collect()
            }),
            format: self.format,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the manifest against the documentation files (default)
    Check,

    /// Show resolved settings
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
