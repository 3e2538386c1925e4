//! Check command implementation.
//!
//! The `docorder check` command verifies that every documentation file is
//! listed in the order manifest and every manifest entry has a file.

use std::path::{Path, PathBuf};

use crate::config::{load_settings, OutputFormat, Settings, SettingsOverrides};
use crate::error::Result;
use crate::files::GlobEnumerator;
use crate::report::{render, Outcome};
use crate::ui::UserInterface;
use crate::verify::{verify, Report};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    root: PathBuf,
    config: Option<PathBuf>,
    overrides: SettingsOverrides,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(root: &Path, config: Option<PathBuf>, overrides: SettingsOverrides) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            overrides,
        }
    }

    fn run(&self, settings: &Settings) -> Result<Report> {
        let enumerator = GlobEnumerator::new(&settings.pattern, settings.ignore.as_slice())?;
        verify(&self.root, &self.root.join(&settings.manifest), &enumerator)
    }

    fn report(&self, ui: &mut dyn UserInterface, outcome: &Outcome, format: OutputFormat) {
        let text = render(outcome, format);
        let text = text.trim_end();
        match (format, outcome) {
            (OutputFormat::Json, _) => ui.message(text),
            (OutputFormat::Human, Outcome::Passed(_)) => {
                if ui.output_mode().shows_success() {
                    ui.success(text);
                }
            }
            (OutputFormat::Human, Outcome::Violation(_)) => ui.error(text),
            (OutputFormat::Human, Outcome::Failure(_)) => ui.diagnostic(text),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (outcome, format) =
            match load_settings(&self.root, self.config.as_deref(), &self.overrides) {
                Ok(settings) => (Outcome::from_result(self.run(&settings)), settings.format),
                Err(e) => (
                    Outcome::from_result(Err(e)),
                    self.overrides.format.unwrap_or_default(),
                ),
            };

        match &outcome {
            Outcome::Passed(_) => tracing::debug!("Check passed"),
            Outcome::Violation(v) => tracing::debug!("Check found violation: {}", v),
            Outcome::Failure(e) => tracing::debug!("Check failed: {:#}", e),
        }

        self.report(ui, &outcome, format);

        if outcome.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use std::path::MAIN_SEPARATOR_STR;
    use tempfile::TempDir;

    fn setup_docs(manifest: &str, files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("order.json"), manifest).unwrap();
        for file in files {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "# page\n").unwrap();
        }
        temp
    }

    fn native(path: &str) -> String {
        path.replace('/', MAIN_SEPARATOR_STR)
    }

    fn run(temp: &TempDir, overrides: SettingsOverrides, ui: &mut MockUI) -> CommandResult {
        CheckCommand::new(temp.path(), None, overrides)
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn consistent_tree_is_silent() {
        let temp = setup_docs(
            r#"{"guides": ["setup", "install/linux"]}"#,
            &["guides/setup.md", "guides/install/linux.md"],
        );
        let mut ui = MockUI::new();

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert!(result.success);
        assert!(ui.is_silent());
    }

    #[test]
    fn verbose_reports_success() {
        let temp = setup_docs(r#"{"guides": ["setup"]}"#, &["guides/setup.md"]);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert!(result.success);
        assert_eq!(ui.successes().len(), 1);
        assert!(ui.successes()[0].contains("match the manifest"));
    }

    #[test]
    fn unlisted_file_reports_one_error_line() {
        let temp = setup_docs(r#"{"guides": []}"#, &["guides/setup.md"]);
        let mut ui = MockUI::new();

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.errors(),
            [format!("Add {} to order.json", native("guides/setup.md"))]
        );
        assert!(ui.diagnostics().is_empty());
    }

    #[test]
    fn stale_entry_reports_remove() {
        let temp = setup_docs(r#"{"guides": ["old-topic"]}"#, &[]);
        let mut ui = MockUI::new();

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.errors(),
            [format!("Remove {} from order.json", native("guides/old-topic.md"))]
        );
    }

    #[test]
    fn malformed_manifest_reports_diagnostic() {
        let temp = setup_docs("{\"guides\": [", &["guides/setup.md"]);
        let mut ui = MockUI::new();

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors().is_empty());
        assert_eq!(ui.diagnostics().len(), 1);
        assert!(ui.diagnostics()[0].contains("Malformed manifest"));
    }

    #[test]
    fn bad_settings_file_is_reported_as_failure() {
        let temp = setup_docs("{}", &[]);
        fs::write(temp.path().join(CONFIG_FILE), "pattern: [").unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.diagnostics()[0].contains("Failed to parse config"));
    }

    #[test]
    fn json_format_writes_to_stdout() {
        let temp = setup_docs(r#"{"guides": []}"#, &["guides/setup.md"]);
        let overrides = SettingsOverrides {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = run(&temp, overrides, &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors().is_empty());
        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["status"], "violation");
        assert_eq!(json["action"], "add");
    }

    #[test]
    fn settings_file_changes_manifest_location() {
        let temp = setup_docs("not json", &["guides/setup.md"]);
        fs::write(temp.path().join("nav.json"), r#"{"guides": ["setup"]}"#).unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "manifest: nav.json\n").unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert!(result.success);
    }

    #[test]
    fn violation_names_configured_manifest() {
        let temp = setup_docs("{}", &["guides/setup.md"]);
        fs::write(temp.path().join("nav.json"), r#"{"guides": []}"#).unwrap();
        let overrides = SettingsOverrides {
            manifest: Some(PathBuf::from("nav.json")),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        run(&temp, overrides, &mut ui);

        assert!(ui.errors()[0].ends_with("to nav.json"));
    }

    #[test]
    fn quiet_mode_prints_nothing_on_failure() {
        let temp = setup_docs(r#"{"guides": []}"#, &["guides/setup.md"]);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        let result = run(&temp, SettingsOverrides::default(), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.is_silent());
    }
}
