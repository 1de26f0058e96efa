//! Mock reporter for testing.
//!
//! `MockReporter` implements [`Reporter`] and captures every message for
//! later assertion. Debug messages are captured regardless of verbosity so
//! tests can check diagnostics without changing levels.

use super::{Reporter, Verbosity};

/// Reporter that records everything it is given.
#[derive(Debug, Default)]
pub struct MockReporter {
    verbosity: Verbosity,
    debugs: Vec<String>,
    infos: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockReporter {
    /// Create a new MockReporter at normal verbosity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockReporter with a specific verbosity.
    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            ..Default::default()
        }
    }

    /// Get all captured debug messages.
    pub fn debugs(&self) -> &[String] {
        &self.debugs
    }

    /// Get all captured info messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a debug message containing `msg` was captured.
    pub fn has_debug(&self, msg: &str) -> bool {
        self.debugs.iter().any(|m| m.contains(msg))
    }

    /// Check if an info message containing `msg` was captured.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was captured.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was captured.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl Reporter for MockReporter {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn debug(&mut self, msg: &str) {
        self.debugs.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_level_separately() {
        let mut reporter = MockReporter::new();
        reporter.debug("d");
        reporter.info("i");
        reporter.success("s");
        reporter.warning("w");
        reporter.error("e");

        assert_eq!(reporter.debugs(), &["d".to_string()]);
        assert_eq!(reporter.infos(), &["i".to_string()]);
        assert_eq!(reporter.successes(), &["s".to_string()]);
        assert_eq!(reporter.warnings(), &["w".to_string()]);
        assert_eq!(reporter.errors(), &["e".to_string()]);
    }

    #[test]
    fn has_helpers_match_substrings() {
        let mut reporter = MockReporter::new();
        reporter.error("Unable to auto install foo");
        assert!(reporter.has_error("auto install"));
        assert!(!reporter.has_warning("auto install"));
    }
}
