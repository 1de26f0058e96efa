//! Terminal reporter.

use super::theme::Theme;
use super::{Reporter, Verbosity};

/// Reporter that writes status to stdout and problems to stderr.
///
/// Debug diagnostics are forwarded to `tracing` so they share the format
/// and filtering of the installed subscriber.
pub struct ConsoleReporter {
    verbosity: Verbosity,
    theme: Theme,
}

impl ConsoleReporter {
    /// Create a reporter styled for the current terminal.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            theme: Theme::detect(),
        }
    }

    /// Create a reporter with an explicit theme.
    pub fn with_theme(verbosity: Verbosity, theme: Theme) -> Self {
        Self { verbosity, theme }
    }
}

impl Reporter for ConsoleReporter {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn debug(&mut self, msg: &str) {
        if self.verbosity.shows_debug() {
            tracing::debug!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.verbosity.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.verbosity.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.verbosity.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
