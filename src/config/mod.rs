//! Manifest loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use pipensure::config::{load_manifest, PackageRequest};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("pipensure.yml");
//! fs::write(&path, "packages:\n  - name: requests\n    version: \">=2.0\"\n").unwrap();
//!
//! let config = load_manifest(&path).unwrap();
//! let request = config.packages[0].request(&config.settings, false);
//! assert!(matches!(request, PackageRequest::Index(_)));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_manifest, manifest_path, parse_manifest, DEFAULT_MANIFEST};
pub use schema::{ManifestConfig, PackageEntry, PackageRequest, Settings};
pub use validator::{validate, validate_manifest, ValidationError};
