//! Installer double that records requests instead of installing.

use super::{InstallFailure, InstallOutput, Installer};
use std::cell::RefCell;

/// Records every requirement it is asked to install and answers with a
/// pre-configured outcome.
///
/// # Example
///
/// ```
/// use pipensure::installer::{Installer, RecordingInstaller};
///
/// let installer = RecordingInstaller::succeeding();
/// installer.install("requests>=2.0").unwrap();
/// assert_eq!(installer.requests(), vec!["requests>=2.0".to_string()]);
/// ```
#[derive(Debug)]
pub struct RecordingInstaller {
    outcome: Result<InstallOutput, InstallFailure>,
    requests: RefCell<Vec<String>>,
}

impl RecordingInstaller {
    /// An installer whose installs always succeed.
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(InstallOutput::default()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// An installer whose installs always fail.
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            outcome: Err(InstallFailure {
                code: Some(code),
                stderr: stderr.to_string(),
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Set the stdout reported by successful installs.
    pub fn with_stdout(mut self, stdout: &str) -> Self {
        if let Ok(output) = &mut self.outcome {
            output.stdout = stdout.to_string();
        }
        self
    }

    /// Requirements requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Number of install calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, requirement: &str) -> Result<InstallOutput, InstallFailure> {
        self.requests.borrow_mut().push(requirement.to_string());
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_requests_in_order() {
        let installer = RecordingInstaller::succeeding();
        installer.install("a").unwrap();
        installer.install("b==1.0").unwrap();
        assert_eq!(installer.call_count(), 2);
        assert_eq!(installer.requests(), vec!["a".to_string(), "b==1.0".to_string()]);
    }

    #[test]
    fn failing_installer_still_records() {
        let installer = RecordingInstaller::failing(1, "boom");
        let failure = installer.install("a").unwrap_err();
        assert_eq!(failure.code, Some(1));
        assert_eq!(installer.call_count(), 1);
    }
}
