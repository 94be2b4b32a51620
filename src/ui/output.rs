//! Output verbosity.

/// How much the UI prints besides results. Prompts, plain messages and
/// errors are shown in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `--verbose`.
    Verbose,
    #[default]
    Normal,
    /// `--quiet`: results and errors only.
    Quiet,
}

impl OutputMode {
    /// Whether "Listing subscriptions..." style spinners are drawn.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether success lines, warnings and headers are printed.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
