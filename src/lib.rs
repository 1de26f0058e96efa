//! pipensure - Make sure Python packages are installed at the version you need.
//!
//! pipensure checks whether a Python package is installed, optionally
//! pinned to a version or to a git commit, and runs
//! `<python> -m pip install <requirement>` when it is missing or out of date.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `pipensure.yml` manifest loading and validation
//! - [`error`] - Error types and result aliases
//! - [`installer`] - The installer seam and the pip implementation
//! - [`logging`] - Tracing subscriber setup
//! - [`package`] - Installed-package lookup and version comparison
//! - [`report`] - Diagnostics reporting
//! - [`requirements`] - Ensuring packages and their outcomes
//! - [`shell`] - Child process execution
//!
//! # Example
//!
//! ```
//! use pipensure::installer::RecordingInstaller;
//! use pipensure::package::{InMemoryEnvironment, InstalledPackage};
//! use pipensure::report::MockReporter;
//! use pipensure::requirements::{PackageEnsurer, PackageStatus, RequireOptions};
//!
//! let env = InMemoryEnvironment::default().with_package(InstalledPackage::new("requests", "2.31.0"));
//! let installer = RecordingInstaller::succeeding();
//! let mut reporter = MockReporter::new();
//!
//! let status = PackageEnsurer::new(&env, &installer)
//!     .require_package("requests", &RequireOptions::pinned(">=2.0"), &mut reporter)
//!     .unwrap();
//! assert_eq!(status, PackageStatus::UpToDate);
//! assert_eq!(installer.call_count(), 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod package;
pub mod report;
pub mod requirements;
pub mod shell;

pub use error::{EnsureError, Result};
