//! Manifest schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `pipensure.yml` manifest format.

use serde::{Deserialize, Serialize};

use crate::installer::DEFAULT_PYTHON;
use crate::requirements::{GitRequireOptions, RequireOptions, DEFAULT_REPO_HOSTNAME};

/// Root structure of `pipensure.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Global settings
    pub settings: Settings,

    /// Packages to ensure, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<PackageEntry>,
}

/// Settings shared by every package in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interpreter used to run pip and discover `sys.path`
    #[serde(default = "default_python")]
    pub python: String,

    /// Host for git packages that do not name one
    #[serde(default = "default_repo_hostname")]
    pub repo_hostname: String,

    /// Report install failures instead of aborting
    #[serde(default = "default_true")]
    pub warn_instead_of_error: bool,

    /// Never install packages that are not already present
    #[serde(default, skip_serializing_if = "is_false")]
    pub only_update_existing: bool,

    /// Extra arguments passed to `pip install` before the requirement
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pip_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: default_python(),
            repo_hostname: default_repo_hostname(),
            warn_instead_of_error: true,
            only_update_existing: false,
            pip_args: Vec::new(),
        }
    }
}

/// One package the manifest requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Distribution name
    pub name: String,

    /// Version pin, e.g. `>=2.28`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Git repository path (`owner/repo`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,

    /// Commit the git install must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Git host overriding `settings.repo_hostname`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Overrides `settings.only_update_existing`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_update_existing: Option<bool>,
}

/// How a manifest entry is to be ensured.
#[derive(Debug, Clone)]
pub enum PackageRequest {
    /// Installed from the package index
    Index(RequireOptions),
    /// Installed from a git repository
    Git {
        repo_path: String,
        options: GitRequireOptions,
    },
}

impl PackageEntry {
    /// Whether this entry installs from git.
    pub fn is_git(&self) -> bool {
        self.git.is_some()
    }

    /// Resolve this entry against the manifest settings.
    pub fn request(&self, settings: &Settings, check_only: bool) -> PackageRequest {
        let only_update_existing = self
            .only_update_existing
            .unwrap_or(settings.only_update_existing);

        match &self.git {
            Some(repo_path) => PackageRequest::Git {
                repo_path: repo_path.clone(),
                options: GitRequireOptions {
                    pin_commit_id: self.commit.clone(),
                    only_update_existing,
                    warn_instead_of_error: settings.warn_instead_of_error,
                    repo_hostname: self
                        .host
                        .clone()
                        .unwrap_or_else(|| settings.repo_hostname.clone()),
                    check_only,
                },
            },
            None => PackageRequest::Index(RequireOptions {
                pin_version: self.version.clone(),
                only_update_existing,
                warn_instead_of_error: settings.warn_instead_of_error,
                check_only,
            }),
        }
    }
}

fn default_python() -> String {
    DEFAULT_PYTHON.to_string()
}

fn default_repo_hostname() -> String {
    DEFAULT_REPO_HOSTNAME.to_string()
}

fn default_true() -> bool {
    true
}

fn is_false(b: &bool) -> bool {
    !*b
}
