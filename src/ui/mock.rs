//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captured output respects the output mode the same way
/// [`TerminalUI`](super::TerminalUI) does.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    diagnostics: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Lines written with `message`.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Lines written with `success`.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Lines written with `error`.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Text written with `diagnostic`.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Whether nothing at all was written.
    pub fn is_silent(&self) -> bool {
        self.messages.is_empty()
            && self.successes.is_empty()
            && self.errors.is_empty()
            && self.diagnostics.is_empty()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_output() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_output() {
            self.successes.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        if self.mode.shows_output() {
            self.errors.push(msg.to_string());
        }
    }

    fn diagnostic(&mut self, text: &str) {
        if self.mode.shows_output() {
            self.diagnostics.push(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.error("bad");
        ui.diagnostic("trace");

        assert_eq!(ui.messages(), ["hello"]);
        assert_eq!(ui.successes(), ["done"]);
        assert_eq!(ui.errors(), ["bad"]);
        assert_eq!(ui.diagnostics(), ["trace"]);
        assert!(!ui.is_silent());
    }

    #[test]
    fn quiet_mode_captures_nothing() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("hello");
        ui.error("bad");
        assert!(ui.is_silent());
    }
}
