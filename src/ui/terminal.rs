//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{DocOrderTheme, OutputMode, UserInterface};

/// Terminal UI writing results to stdout and failures to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    out_theme: DocOrderTheme,
    err_theme: DocOrderTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let out = Term::stdout();
        let err = Term::stderr();

        Self {
            out_theme: DocOrderTheme::for_term(&out),
            err_theme: DocOrderTheme::for_term(&err),
            out,
            err,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_output() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_output() {
            writeln!(self.out, "{}", self.out_theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        if self.mode.shows_output() {
            writeln!(self.err, "{}", self.err_theme.format_error(msg)).ok();
        }
    }

    fn diagnostic(&mut self, text: &str) {
        if self.mode.shows_output() {
            writeln!(self.err, "{}", text.trim_end()).ok();
        }
    }
}
