//! Diagnostic reporting.
//!
//! Every entry point receives a [`Reporter`] explicitly instead of logging
//! through a process-wide logger. This module provides:
//! - [`Reporter`] trait for the reporting seam
//! - [`ConsoleReporter`] for terminal output (debug lines go to `tracing`)
//! - [`MockReporter`] capturing everything for assertions
//!
//! # Example
//!
//! ```
//! use pipensure::report::{MockReporter, Reporter, Verbosity};
//!
//! let mut reporter = MockReporter::with_verbosity(Verbosity::Debug);
//! reporter.debug("looking up requests");
//! reporter.warning("not a VCS package");
//!
//! assert!(reporter.has_debug("requests"));
//! assert!(reporter.has_warning("VCS"));
//! ```

pub mod console;
pub mod mock;
pub mod theme;

pub use console::ConsoleReporter;
pub use mock::MockReporter;
pub use theme::{should_use_colors, Theme};

use std::str::FromStr;

/// How much a reporter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Status, warnings and errors.
    #[default]
    Normal,
    /// Everything, including debug diagnostics.
    Debug,
}

impl Verbosity {
    /// Whether debug diagnostics are shown.
    pub fn shows_debug(&self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Whether status messages are shown.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("unknown verbosity: {}", s)),
        }
    }
}

/// Receiver of diagnostics produced while ensuring packages.
pub trait Reporter {
    /// Current verbosity.
    fn verbosity(&self) -> Verbosity;

    /// Raise or lower verbosity.
    fn set_verbosity(&mut self, verbosity: Verbosity);

    /// Raise verbosity to debug level.
    fn set_debug(&mut self) {
        self.set_verbosity(Verbosity::Debug);
    }

    /// Low-level diagnostic, only shown at debug verbosity.
    fn debug(&mut self, msg: &str);

    /// Progress message.
    fn info(&mut self, msg: &str);

    /// Positive outcome.
    fn success(&mut self, msg: &str);

    /// Recoverable problem.
    fn warning(&mut self, msg: &str);

    /// Failure.
    fn error(&mut self, msg: &str);
}
