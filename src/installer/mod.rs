//! Package installation.
//!
//! The [`Installer`] trait is the seam between the orchestrator and the
//! package manager: it receives a single requirement string and reports
//! whether installing it succeeded. [`PipInstaller`] runs
//! `<python> -m pip install`; tests substitute [`RecordingInstaller`].

pub mod pip;
pub mod recording;

pub use pip::{PipInstaller, DEFAULT_PYTHON};
pub use recording::RecordingInstaller;

use crate::error::{EnsureError, Result};
use crate::report::Reporter;
use crate::requirements::status::PackageStatus;
use std::fmt;

/// Output of a successful install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutput {
    /// Captured standard output.
    pub stdout: String,
}

/// Why an install did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallFailure {
    /// Exit code, `None` if the process could not start or was killed.
    pub code: Option<i32>,

    /// Captured standard error, or the spawn error.
    pub stderr: String,
}

impl fmt::Display for InstallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "installer exited with code {}", code)?,
            None => write!(f, "installer did not run to completion")?,
        }
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            write!(f, ": {}", stderr)?;
        }
        Ok(())
    }
}

/// Something that can install a requirement into the environment.
pub trait Installer {
    /// Install `requirement`, blocking until the installer exits.
    fn install(&self, requirement: &str) -> std::result::Result<InstallOutput, InstallFailure>;
}

/// Install `requirement` and translate the outcome into a status.
///
/// Success means the desired state now holds, so it reports `UpToDate`.
/// A failure is an `AutoInstallFailure` error when `warn_instead_of_error`
/// is false, otherwise it is reported and yields `Failed`.
pub fn install(
    installer: &dyn Installer,
    requirement: &str,
    package: &str,
    warn_instead_of_error: bool,
    reporter: &mut dyn Reporter,
) -> Result<PackageStatus> {
    reporter.debug(&format!("Installing requirement '{}'", requirement));

    match installer.install(requirement) {
        Ok(output) => {
            if !output.stdout.trim().is_empty() {
                reporter.debug(output.stdout.trim());
            }
            Ok(PackageStatus::UpToDate)
        }
        Err(failure) => {
            if !warn_instead_of_error {
                return Err(EnsureError::AutoInstallFailure {
                    package: package.to_string(),
                    message: failure.to_string(),
                });
            }
            reporter.error(&format!("Unable to auto install {}", package));
            reporter.debug(&failure.to_string());
            Ok(PackageStatus::Failed)
        }
    }
}
