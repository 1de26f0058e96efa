//! Installed-distribution metadata.
//!
//! Each installed distribution leaves a `<name>-<version>.dist-info` (or a
//! legacy `.egg-info`) directory next to the package. The `METADATA` /
//! `PKG-INFO` header block carries the name and version, and distributions
//! installed from a URL or VCS checkout also record a `direct_url.json`.

use crate::error::{EnsureError, Result};
use crate::package::name::canonicalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Provenance recorded in `direct_url.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectUrl {
    /// URL the distribution was installed from.
    pub url: String,

    /// Set when installed from a version-control checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs_info: Option<VcsInfo>,

    /// Set when installed from a local directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir_info: Option<DirInfo>,

    /// Set when installed from an archive URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_info: Option<ArchiveInfo>,

    /// Subdirectory of the source that holds the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectory: Option<String>,
}

/// Version-control provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsInfo {
    /// VCS kind: `git`, `hg`, `bzr` or `svn`.
    pub vcs: String,

    /// Resolved commit the distribution was built from.
    pub commit_id: String,

    /// Revision the user asked for (branch, tag, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_revision: Option<String>,
}

/// Local directory provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirInfo {
    #[serde(default)]
    pub editable: bool,
}

/// Archive provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hashes: BTreeMap<String, String>,
}

impl DirectUrl {
    /// Provenance of a git checkout at `commit_id`.
    pub fn git(url: impl Into<String>, commit_id: impl Into<String>) -> Self {
        Self::vcs("git", url, commit_id)
    }

    /// Provenance of a checkout of any VCS kind.
    pub fn vcs(kind: &str, url: impl Into<String>, commit_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            vcs_info: Some(VcsInfo {
                vcs: kind.to_string(),
                commit_id: commit_id.into(),
                requested_revision: None,
            }),
            dir_info: None,
            archive_info: None,
            subdirectory: None,
        }
    }

    /// Provenance of an archive download.
    pub fn archive(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            vcs_info: None,
            dir_info: None,
            archive_info: Some(ArchiveInfo::default()),
            subdirectory: None,
        }
    }

    /// Provenance of a local directory install.
    pub fn directory(url: impl Into<String>, editable: bool) -> Self {
        Self {
            url: url.into(),
            vcs_info: None,
            dir_info: Some(DirInfo { editable }),
            archive_info: None,
            subdirectory: None,
        }
    }

    /// Whether this was an editable (`pip install -e`) install.
    pub fn is_editable(&self) -> bool {
        self.dir_info.as_ref().is_some_and(|d| d.editable)
    }

    /// Parse a `direct_url.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| EnsureError::MetadataError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Read-only view of one installed distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledPackage {
    /// Name as recorded in the metadata.
    pub name: String,

    /// Canonical form of `name`.
    pub canonical_name: String,

    /// Version string as recorded in the metadata.
    pub version: String,

    /// The `.dist-info` / `.egg-info` directory, or the single
    /// `.egg-info` file.
    pub location: PathBuf,

    /// Direct-URL provenance, absent for index installs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_url: Option<DirectUrl>,
}

impl InstalledPackage {
    /// Create a package record with no location or provenance.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            canonical_name: canonicalize(name),
            version: version.to_string(),
            location: PathBuf::new(),
            direct_url: None,
        }
    }

    /// Attach direct-URL provenance.
    pub fn with_direct_url(mut self, direct_url: DirectUrl) -> Self {
        self.direct_url = Some(direct_url);
        self
    }

    /// Whether this was an editable install.
    pub fn is_editable(&self) -> bool {
        self.direct_url.as_ref().is_some_and(DirectUrl::is_editable)
    }

    /// Read a `.dist-info` or `.egg-info` directory, or a single-file
    /// `.egg-info` as written by distutils.
    ///
    /// Returns `Ok(None)` when no metadata file exists or the metadata lacks
    /// a name or version.
    pub fn from_metadata_path(path: &Path) -> Result<Option<Self>> {
        let metadata_file = if path.is_file() {
            Some(path.to_path_buf())
        } else {
            ["METADATA", "PKG-INFO"]
                .iter()
                .map(|file| path.join(file))
                .find(|candidate| candidate.is_file())
        };
        let Some(metadata_file) = metadata_file else {
            return Ok(None);
        };

        let content = fs::read_to_string(&metadata_file)?;
        let (Some(name), Some(version)) = (
            header_value(&content, "Name"),
            header_value(&content, "Version"),
        ) else {
            return Ok(None);
        };

        // Single-file metadata never carries direct-URL provenance.
        let direct_url_path = path.join("direct_url.json");
        let direct_url = if path.is_dir() && direct_url_path.is_file() {
            Some(DirectUrl::load(&direct_url_path)?)
        } else {
            None
        };

        Ok(Some(Self {
            canonical_name: canonicalize(&name),
            name,
            version,
            location: path.to_path_buf(),
            direct_url,
        }))
    }
}

/// Look up a header in the RFC 822 block at the top of a metadata file.
fn header_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
