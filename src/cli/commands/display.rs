//! Shared display helpers for package status lines.
//!
//! Used by `require`, `require-git` and `sync` so every command renders
//! [`PackageStatus`] values the same way.

use crate::package::{DirectUrl, InstalledPackage};
use crate::report::Reporter;
use crate::requirements::PackageStatus;

/// Human-readable description of a status.
pub fn status_text(status: PackageStatus) -> &'static str {
    match status {
        PackageStatus::UpToDate => "up to date",
        PackageStatus::Found => "installed",
        PackageStatus::OutDated => "out of date",
        PackageStatus::NotFound => "not installed",
        PackageStatus::NotVcsPackage => "not installed from version control",
        PackageStatus::NotGitPackage => "not installed from git",
        PackageStatus::Failed => "install failed",
    }
}

/// Print a single package's status line, styled by severity.
pub fn show_package_status(reporter: &mut dyn Reporter, name: &str, status: PackageStatus) {
    let line = format!("{} {}", name, status_text(status));
    match status {
        PackageStatus::UpToDate | PackageStatus::Found => reporter.success(&line),
        PackageStatus::Failed => reporter.error(&line),
        PackageStatus::OutDated
        | PackageStatus::NotFound
        | PackageStatus::NotVcsPackage
        | PackageStatus::NotGitPackage => reporter.warning(&line),
    }
}

/// Describe where an installed package came from.
pub fn describe_source(package: &InstalledPackage) -> String {
    match &package.direct_url {
        None => "index".to_string(),
        Some(direct_url) => describe_direct_url(direct_url),
    }
}

fn describe_direct_url(direct_url: &DirectUrl) -> String {
    if let Some(vcs) = &direct_url.vcs_info {
        format!("{}+{}@{}", vcs.vcs, direct_url.url, vcs.commit_id)
    } else if direct_url.dir_info.is_some() {
        format!("directory {}", direct_url.url)
    } else {
        format!("archive {}", direct_url.url)
    }
}
