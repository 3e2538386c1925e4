//! Config command implementation.
//!
//! The `docorder config` command shows the resolved settings.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{find_config_file, load_settings, SettingsOverrides};
use crate::error::{DocOrderError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    root: PathBuf,
    config: Option<PathBuf>,
    overrides: SettingsOverrides,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(
        root: &Path,
        config: Option<PathBuf>,
        overrides: SettingsOverrides,
        args: ConfigArgs,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            overrides,
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.root, self.config.as_deref(), &self.overrides)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&settings)
                .map_err(|e| DocOrderError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let source = self
                .config
                .clone()
                .or_else(|| find_config_file(&self.root));
            if let Some(path) = source {
                ui.message(&format!("# {}", path.display()));
            }
            let yaml =
                serde_yaml::to_string(&settings).map_err(|e| DocOrderError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}
