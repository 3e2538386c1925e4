//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout and stderr
//! - [`MockUI`] capturing output in tests
//!
//! # Example
//!
//! ```
//! use docorder::ui::{MockUI, OutputMode, UserInterface};
//!
//! let mut ui = MockUI::with_mode(OutputMode::Verbose);
//! ui.success("All files listed");
//! assert_eq!(ui.successes(), ["All files listed"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DocOrderTheme};

/// Trait for user-facing output.
///
/// Regular output goes to stdout, errors and diagnostics to stderr.
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write a plain line to stdout.
    fn message(&mut self, msg: &str);

    /// Write a success line to stdout.
    fn success(&mut self, msg: &str);

    /// Write an error line to stderr.
    fn error(&mut self, msg: &str);

    /// Write unstyled, possibly multi-line diagnostic text to stderr.
    fn diagnostic(&mut self, text: &str);
}
