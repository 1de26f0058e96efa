//! Package requirement orchestration.
//!
//! [`PackageEnsurer`] looks a package up, compares it with the requested
//! pin and installs it when needed. Every path ends in exactly one
//! [`PackageStatus`]; nothing is retried.

use crate::error::{EnsureError, Result};
use crate::installer::{install, Installer};
use crate::package::inspector::{find_installed, git_provenance, Environment, GitProvenance};
use crate::package::version::VersionSpec;
use crate::report::Reporter;
use crate::requirements::status::PackageStatus;

/// Host used for git packages when none is given.
pub const DEFAULT_REPO_HOSTNAME: &str = "github.com";

/// Options for [`PackageEnsurer::require_package`].
#[derive(Debug, Clone)]
pub struct RequireOptions {
    /// Version pin such as `>=2.0`; `None` accepts any installed version.
    pub pin_version: Option<String>,

    /// Never install a package that is not already present.
    pub only_update_existing: bool,

    /// Report install failures instead of returning an error.
    pub warn_instead_of_error: bool,

    /// Report what would be done without installing anything.
    pub check_only: bool,
}

impl Default for RequireOptions {
    fn default() -> Self {
        Self {
            pin_version: None,
            only_update_existing: false,
            warn_instead_of_error: true,
            check_only: false,
        }
    }
}

impl RequireOptions {
    /// Options pinning `version`.
    pub fn pinned(version: &str) -> Self {
        Self {
            pin_version: Some(version.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`PackageEnsurer::require_git_package`].
#[derive(Debug, Clone)]
pub struct GitRequireOptions {
    /// Commit the installed package must have been built from.
    pub pin_commit_id: Option<String>,

    /// Never install a package that is not already present.
    pub only_update_existing: bool,

    /// Report problems instead of returning an error.
    pub warn_instead_of_error: bool,

    /// Git host, with or without scheme.
    pub repo_hostname: String,

    /// Report what would be done without installing anything.
    pub check_only: bool,
}

impl Default for GitRequireOptions {
    fn default() -> Self {
        Self {
            pin_commit_id: None,
            only_update_existing: false,
            warn_instead_of_error: true,
            repo_hostname: DEFAULT_REPO_HOSTNAME.to_string(),
            check_only: false,
        }
    }
}

impl GitRequireOptions {
    /// Options pinning `commit_id`.
    pub fn pinned(commit_id: &str) -> Self {
        Self {
            pin_commit_id: Some(commit_id.to_string()),
            ..Default::default()
        }
    }
}

/// Give `hostname` exactly one scheme and no trailing slash.
///
/// Hosts without a scheme get `https://`; an explicit `http://` or
/// `https://` is kept as given.
pub fn normalize_hostname(hostname: &str) -> String {
    let trimmed = hostname.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Checks packages against pins and installs them when needed.
pub struct PackageEnsurer<'a> {
    environment: &'a dyn Environment,
    installer: &'a dyn Installer,
}

impl<'a> PackageEnsurer<'a> {
    /// Create an ensurer reading from `environment` and installing with `installer`.
    pub fn new(environment: &'a dyn Environment, installer: &'a dyn Installer) -> Self {
        Self {
            environment,
            installer,
        }
    }

    /// Ensure `name` is installed and satisfies `options.pin_version`.
    ///
    /// An invalid pin is always an error, even when the package is absent.
    pub fn require_package(
        &self,
        name: &str,
        options: &RequireOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<PackageStatus> {
        reporter.debug(&format!("Processing package '{}'", name));

        let spec = options
            .pin_version
            .as_deref()
            .map(VersionSpec::parse)
            .transpose()?;

        let package = find_installed(self.environment, name, reporter)?;

        match (&package, &spec) {
            (Some(_), None) => {
                reporter.debug("Package already installed");
                return Ok(PackageStatus::UpToDate);
            }
            (Some(installed), Some(spec)) => match spec.is_satisfied_by(&installed.version) {
                Ok(true) => {
                    reporter.debug("Package up-to-date");
                    return Ok(PackageStatus::UpToDate);
                }
                Ok(false) => reporter.debug(&format!(
                    "Installed version {} does not satisfy {}",
                    installed.version, spec
                )),
                Err(EnsureError::InvalidVersionSpec { .. }) => reporter.debug(&format!(
                    "Installed version '{}' is not comparable, treating as out of date",
                    installed.version
                )),
                Err(e) => return Err(e),
            },
            (None, _) if options.only_update_existing => {
                reporter.debug("Package not found. Skipping.");
                return Ok(PackageStatus::NotFound);
            }
            (None, _) => {}
        }

        if options.check_only {
            return Ok(if package.is_some() {
                PackageStatus::OutDated
            } else {
                PackageStatus::NotFound
            });
        }

        let requirement = match &spec {
            Some(spec) => spec.requirement_for(name),
            None => name.to_string(),
        };

        reporter.info(&format!("Installing package {}", name));
        install(
            self.installer,
            &requirement,
            name,
            options.warn_instead_of_error,
            reporter,
        )
    }

    /// Ensure `name` is installed from the git repository `repo_path`
    /// (`owner/repo`) and, when pinned, built from `options.pin_commit_id`.
    pub fn require_git_package(
        &self,
        name: &str,
        repo_path: &str,
        options: &GitRequireOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<PackageStatus> {
        reporter.debug(&format!("Processing package '{}'", name));

        let package = find_installed(self.environment, name, reporter)?;

        match &package {
            None if options.only_update_existing => {
                reporter.debug("Package not found. Skipping.");
                return Ok(PackageStatus::NotFound);
            }
            None => {}
            Some(installed) => {
                let Some(pin) = options.pin_commit_id.as_deref() else {
                    reporter.debug("Package already installed");
                    return Ok(PackageStatus::Found);
                };

                let provenance = git_provenance(installed, reporter);
                if provenance.commit_id() == Some(pin) {
                    reporter.debug("Package up-to-date");
                    return Ok(PackageStatus::UpToDate);
                }

                match &provenance {
                    GitProvenance::NotVcs | GitProvenance::OtherVcs { .. } => {
                        let message = format!("Given package {} is not a VCS package.", name);
                        if !options.warn_instead_of_error {
                            return Err(EnsureError::AutoInstallFailure {
                                package: name.to_string(),
                                message,
                            });
                        }
                        reporter.warning(&format!("{} Skipping.", message));
                        return Ok(provenance.status());
                    }
                    GitProvenance::Git { commit_id, .. } => reporter.debug(&format!(
                        "Installed commit {} does not match pinned {}",
                        commit_id, pin
                    )),
                }
            }
        }

        if options.check_only {
            return Ok(if package.is_some() {
                PackageStatus::OutDated
            } else {
                PackageStatus::NotFound
            });
        }

        let requirement = format!(
            "git+{}/{}",
            normalize_hostname(&options.repo_hostname),
            repo_path.trim_start_matches('/')
        );

        reporter.info(&format!("Installing package '{}'", name));
        install(
            self.installer,
            &requirement,
            name,
            options.warn_instead_of_error,
            reporter,
        )
    }
}
