//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also report success.
    Verbose,
    /// Stay silent on success, report failures.
    #[default]
    Normal,
    /// Print nothing; only the exit status signals the result.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the `--verbose` and `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode reports success.
    pub fn shows_success(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode prints anything at all.
    pub fn shows_output(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
