//! Error types for pipensure operations.
//!
//! This module defines [`EnsureError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Outcomes a caller is expected to branch on (package missing, install
//!   failed in warn mode, ...) are reported through
//!   [`PackageStatus`](crate::requirements::PackageStatus), not through errors
//! - Malformed pins and unknown operators are always errors
//! - `AutoInstallFailure` is only produced when the caller opts into hard
//!   failures (`warn_instead_of_error = false`)
//! - Use `anyhow::Error` (via `EnsureError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pipensure operations.
#[derive(Debug, Error)]
pub enum EnsureError {
    /// The pin string carries no parseable version digits.
    #[error("'{spec}' is not a valid version string")]
    InvalidVersionSpec { spec: String },

    /// A comparison operator outside `==`, `>=`, `<=`, `>`, `<`.
    #[error("Unknown operator '{operator}'")]
    UnknownOperator { operator: String },

    /// Automatic installation could not bring the package up to date.
    #[error("Unable to auto install {package}: {message}")]
    AutoInstallFailure { package: String, message: String },

    /// Manifest file not found at the expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Invalid manifest structure or values.
    #[error("Invalid manifest: {message}")]
    ManifestValidationError { message: String },

    /// Installed-distribution metadata could not be read.
    #[error("Invalid package metadata at {path}: {message}")]
    MetadataError { path: PathBuf, message: String },

    /// The Python interpreter could not report its search path.
    #[error("Failed to query interpreter '{python}': {message}")]
    InterpreterFailed { python: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pipensure operations.
pub type Result<T> = std::result::Result<T, EnsureError>;
