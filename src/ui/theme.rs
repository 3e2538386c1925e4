//! Visual theme and styling.

use console::{Style, Term};

/// docorder's visual theme.
#[derive(Debug, Clone)]
pub struct DocOrderTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for DocOrderTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DocOrderTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme for output written to `term`.
    pub fn for_term(term: &Term) -> Self {
        if should_use_colors(term) {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message. The text itself is left unchanged.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Whether output written to `term` should be colored.
pub fn should_use_colors(term: &Term) -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    term.is_term()
}
