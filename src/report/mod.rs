//! Rendering verification outcomes.
//!
//! This module provides formatters for a single run's [`Outcome`] in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use std::io::Write;

use crate::config::OutputFormat;
use crate::error::{DocOrderError, Result, Violation};
use crate::verify::Report;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// The result of one verification run, classified for reporting.
#[derive(Debug)]
pub enum Outcome {
    /// Files and manifest agree.
    Passed(Report),
    /// Files and manifest disagree.
    Violation(Violation),
    /// The check could not run.
    Failure(anyhow::Error),
}

impl Outcome {
    /// Classify a verification result.
    pub fn from_result(result: Result<Report>) -> Self {
        match result {
            Ok(report) => Outcome::Passed(report),
            Err(DocOrderError::Violation(violation)) => Outcome::Violation(violation),
            Err(err) => Outcome::Failure(err.into_anyhow()),
        }
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Passed(_) => 0,
            Outcome::Violation(_) | Outcome::Failure(_) => 1,
        }
    }

    /// Whether the run passed.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed(_))
    }
}

/// Trait for formatting an outcome.
pub trait OutcomeFormatter {
    /// Format `outcome` to the given writer.
    fn format<W: Write>(&self, outcome: &Outcome, writer: &mut W) -> std::io::Result<()>;
}

/// Render `outcome` in `format` as a string.
pub fn render(outcome: &Outcome, format: OutputFormat) -> String {
    let mut output = Vec::new();
    match format {
        OutputFormat::Human => HumanFormatter::new().format(outcome, &mut output).ok(),
        OutputFormat::Json => JsonFormatter::new().format(outcome, &mut output).ok(),
    };
    String::from_utf8(output).unwrap_or_default()
}
