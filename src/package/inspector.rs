//! Installed-package lookup.
//!
//! An [`Environment`] lists the distributions installed for one Python
//! interpreter. [`SitePackages`] reads them from `.dist-info` and `.egg-info`
//! metadata on the interpreter's search path; [`InMemoryEnvironment`] serves a
//! fixed list.

use crate::error::{EnsureError, Result};
use crate::package::metadata::InstalledPackage;
use crate::package::name::canonicalize;
use crate::report::Reporter;
use crate::requirements::status::PackageStatus;
use crate::shell::execute;
use std::fs;
use std::path::{Path, PathBuf};

/// Prints the interpreter's module search path as a JSON list.
const SYS_PATH_SCRIPT: &str = "import json, sys; print(json.dumps(sys.path))";

/// A queryable snapshot of installed distributions.
pub trait Environment {
    /// All installed distributions, in search-path order.
    fn installed(&self) -> Result<Vec<InstalledPackage>>;
}

/// Distributions found in a list of `site-packages` style directories.
#[derive(Debug, Clone, Default)]
pub struct SitePackages {
    paths: Vec<PathBuf>,
}

impl SitePackages {
    /// Scan the given directories, earlier ones taking precedence.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Ask `python` for its `sys.path` and scan that.
    pub fn discover(python: &str) -> Result<Self> {
        let failed = |message: String| EnsureError::InterpreterFailed {
            python: python.to_string(),
            message,
        };

        let result =
            execute(python, ["-c", SYS_PATH_SCRIPT]).map_err(|e| failed(e.to_string()))?;
        tracing::debug!("Read sys.path from {} in {:.2?}", python, result.duration);
        if !result.success {
            return Err(failed(format!(
                "exited with code {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            )));
        }

        let entries: Vec<String> =
            serde_json::from_str(result.stdout.trim()).map_err(|e| failed(e.to_string()))?;
        let paths = entries
            .into_iter()
            .filter(|entry| !entry.is_empty())
            .map(PathBuf::from)
            .collect();

        Ok(Self::new(paths))
    }

    /// Directories that will be scanned.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

fn is_metadata_entry(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("dist-info") => path.is_dir(),
        // distutils writes egg-info as a single PKG-INFO file
        Some("egg-info") => path.is_dir() || path.is_file(),
        _ => false,
    }
}

fn resolve(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Project directories of legacy editable installs.
///
/// `setup.py develop` and `pip install -e` without PEP 660 leave a
/// `<name>.egg-link` whose first line is the directory holding the
/// project's `.egg-info`.
fn egg_link_targets(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut targets = Vec::new();

    for dir in dirs {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };

        for path in entries.filter_map(|entry| entry.ok()).map(|entry| entry.path()) {
            if path.extension().and_then(|ext| ext.to_str()) != Some("egg-link") {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            if let Some(target) = content.lines().map(str::trim).find(|line| !line.is_empty()) {
                targets.push(resolve(&dir.join(target)));
            }
        }
    }

    targets
}

impl Environment for SitePackages {
    fn installed(&self) -> Result<Vec<InstalledPackage>> {
        let editable_roots = egg_link_targets(&self.paths);
        let mut packages = Vec::new();

        for dir in &self.paths {
            // Zip archives and missing entries on sys.path hold nothing to scan.
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };

            let mut metadata_paths: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| is_metadata_entry(path))
                .collect();
            metadata_paths.sort();

            let in_editable_root = editable_roots.contains(&resolve(dir));

            for path in metadata_paths {
                if in_editable_root {
                    tracing::debug!("Skipping {}: editable install", path.display());
                    continue;
                }
                match InstalledPackage::from_metadata_path(&path) {
                    Ok(Some(package)) => packages.push(package),
                    Ok(None) => {
                        tracing::debug!("Skipping {}: no name or version", path.display())
                    }
                    Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
                }
            }
        }

        Ok(packages)
    }
}

/// A fixed set of installed packages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironment {
    packages: Vec<InstalledPackage>,
}

impl InMemoryEnvironment {
    /// Create an environment holding `packages`.
    pub fn new(packages: Vec<InstalledPackage>) -> Self {
        Self { packages }
    }

    /// Add one package.
    pub fn with_package(mut self, package: InstalledPackage) -> Self {
        self.packages.push(package);
        self
    }
}

impl Environment for InMemoryEnvironment {
    fn installed(&self) -> Result<Vec<InstalledPackage>> {
        Ok(self.packages.clone())
    }
}

/// Find the first installed, non-editable distribution named `name`.
///
/// Names are compared in canonical form, so `Foo_Bar` finds `foo-bar`.
pub fn find_installed(
    environment: &dyn Environment,
    name: &str,
    reporter: &mut dyn Reporter,
) -> Result<Option<InstalledPackage>> {
    let wanted = canonicalize(name);

    let found = environment
        .installed()?
        .into_iter()
        .filter(|package| !package.is_editable())
        .find(|package| package.canonical_name == wanted);

    if found.is_none() {
        reporter.debug("No existing package found");
    }
    Ok(found)
}

/// Git provenance of an installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitProvenance {
    /// Installed from an index, archive or local directory.
    NotVcs,
    /// Installed from a VCS other than git.
    OtherVcs { vcs: String },
    /// Installed from a git checkout.
    Git { url: String, commit_id: String },
}

impl GitProvenance {
    /// Status this provenance reports.
    pub fn status(&self) -> PackageStatus {
        match self {
            GitProvenance::NotVcs => PackageStatus::NotVcsPackage,
            GitProvenance::OtherVcs { .. } => PackageStatus::NotGitPackage,
            GitProvenance::Git { .. } => PackageStatus::Found,
        }
    }

    /// Commit the package was built from, for git installs.
    pub fn commit_id(&self) -> Option<&str> {
        match self {
            GitProvenance::Git { commit_id, .. } => Some(commit_id.as_str()),
            _ => None,
        }
    }
}

/// Extract the git commit an installed package was built from.
pub fn git_provenance(package: &InstalledPackage, reporter: &mut dyn Reporter) -> GitProvenance {
    reporter.debug(&format!(
        "Found package '{}' with direct_url {:?}",
        package.name, package.direct_url
    ));

    let vcs = package
        .direct_url
        .as_ref()
        .and_then(|direct_url| direct_url.vcs_info.as_ref().map(|info| (direct_url, info)));
    let Some((direct_url, vcs_info)) = vcs else {
        reporter.debug(&format!(
            "Package '{}' is not a vcs package",
            package.canonical_name
        ));
        return GitProvenance::NotVcs;
    };

    if vcs_info.vcs != "git" {
        reporter.debug(&format!(
            "Package '{}' is not a git package",
            package.canonical_name
        ));
        return GitProvenance::OtherVcs {
            vcs: vcs_info.vcs.clone(),
        };
    }

    reporter.debug(&format!(
        "Requirement string: {}+{}@{}",
        vcs_info.vcs, direct_url.url, vcs_info.commit_id
    ));
    GitProvenance::Git {
        url: direct_url.url.clone(),
        commit_id: vcs_info.commit_id.clone(),
    }
}
