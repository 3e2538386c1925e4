//! JSON output formatter.
//!
//! Formats an outcome as a single machine-readable JSON object.

use super::{Outcome, OutcomeFormatter};
use serde::Serialize;
use std::io::Write;

/// Formats outcomes as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonOutcome<'a> {
    #[serde(rename = "ok")]
    Passed {
        categories: usize,
        entries: usize,
        files: usize,
    },
    Violation {
        action: &'static str,
        file: &'a str,
        message: String,
    },
    Error {
        message: String,
        causes: Vec<String>,
    },
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeFormatter for JsonFormatter {
    fn format<W: Write>(&self, outcome: &Outcome, writer: &mut W) -> std::io::Result<()> {
        let json = match outcome {
            Outcome::Passed(report) => JsonOutcome::Passed {
                categories: report.categories,
                entries: report.entries,
                files: report.files,
            },
            Outcome::Violation(violation) => JsonOutcome::Violation {
                action: violation.action(),
                file: violation.file(),
                message: violation.to_string(),
            },
            Outcome::Failure(err) => JsonOutcome::Error {
                message: err.to_string(),
                causes: err.chain().skip(1).map(|c| c.to_string()).collect(),
            },
        };

        serde_json::to_writer(&mut *writer, &json)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DocOrderError, Violation};
    use crate::verify::Report;
    use serde_json::Value;

    fn format(outcome: &Outcome) -> Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(outcome, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn passed_reports_counts() {
        let json = format(&Outcome::Passed(Report {
            categories: 2,
            entries: 3,
            files: 3,
        }));
        assert_eq!(json["status"], "ok");
        assert_eq!(json["categories"], 2);
        assert_eq!(json["files"], 3);
    }

    #[test]
    fn violation_reports_action_and_file() {
        let json = format(&Outcome::Violation(Violation::Stale {
            file: "guides/old-topic.md".into(),
            manifest: "order.json".into(),
        }));
        assert_eq!(json["status"], "violation");
        assert_eq!(json["action"], "remove");
        assert_eq!(json["file"], "guides/old-topic.md");
        assert_eq!(json["message"], "Remove guides/old-topic.md from order.json");
    }

    #[test]
    fn failure_reports_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let inner = anyhow::Error::new(io).context("Failed to read manifest order.json");
        let json = format(&Outcome::Failure(DocOrderError::Other(inner).into_anyhow()));
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Failed to read manifest order.json");
        assert_eq!(json["causes"][0], "access denied");
    }

    #[test]
    fn output_is_one_line() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&Outcome::Passed(Report::default()), &mut output)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
