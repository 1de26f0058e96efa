//! Installed-package inspection and version pins.
//!
//! # Modules
//!
//! - [`name`] - Distribution name canonicalization
//! - [`version`] - Version parsing, pins and comparison
//! - [`metadata`] - `.dist-info` metadata and direct-URL provenance
//! - [`inspector`] - Environment lookup and git provenance

pub mod inspector;
pub mod metadata;
pub mod name;
pub mod version;

pub use inspector::{
    find_installed, git_provenance, Environment, GitProvenance, InMemoryEnvironment, SitePackages,
};
pub use metadata::{DirectUrl, InstalledPackage, VcsInfo};
pub use name::canonicalize;
pub use version::{parse_pin, satisfies, Operator, Version, VersionSpec};
