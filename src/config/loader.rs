//! Manifest discovery and loading.

use crate::config::schema::ManifestConfig;
use crate::config::validator::validate;
use crate::error::{EnsureError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_MANIFEST: &str = "pipensure.yml";

/// Path of the manifest to load: `explicit` if given, else
/// `pipensure.yml` under `dir`.
pub fn manifest_path(explicit: Option<&Path>, dir: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(DEFAULT_MANIFEST))
}

/// Load, parse and validate a manifest file.
pub fn load_manifest(path: &Path) -> Result<ManifestConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnsureError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnsureError::Io(e)
        }
    })?;

    let config = parse_manifest(&content, path)?;
    validate(&config)?;
    tracing::debug!(
        "Loaded manifest {} with {} package(s)",
        path.display(),
        config.packages.len()
    );
    Ok(config)
}

/// Parse YAML content into a [`ManifestConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<ManifestConfig> {
    serde_yaml::from_str(content).map_err(|e| EnsureError::ManifestParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
