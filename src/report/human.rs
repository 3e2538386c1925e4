//! Human-readable output formatter.
//!
//! A violation renders as exactly its corrective instruction. A failure
//! renders as the error followed by its causes, and a backtrace when one
//! was captured (`RUST_BACKTRACE=1`).

use super::{Outcome, OutcomeFormatter};
use std::io::Write;

/// Formats outcomes for human consumption.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeFormatter for HumanFormatter {
    fn format<W: Write>(&self, outcome: &Outcome, writer: &mut W) -> std::io::Result<()> {
        match outcome {
            Outcome::Passed(report) => writeln!(
                writer,
                "{} file(s) in {} categor{} match the manifest",
                report.files,
                report.categories,
                if report.categories == 1 { "y" } else { "ies" }
            ),
            Outcome::Violation(violation) => writeln!(writer, "{}", violation),
            Outcome::Failure(err) => writeln!(writer, "Error: {:?}", err),
        }
    }
}
