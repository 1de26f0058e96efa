//! Package requirement checking and installation.
//!
//! This module ties package lookup, version comparison and installation
//! together into the decision procedures behind `require` and `require-git`.
//!
//! # Modules
//!
//! - [`status`] - Status values returned by every check
//! - [`ensure`] - The orchestrator and its options

pub mod ensure;
pub mod status;

pub use ensure::{
    normalize_hostname, GitRequireOptions, PackageEnsurer, RequireOptions, DEFAULT_REPO_HOSTNAME,
};
pub use status::PackageStatus;
