//! Package status types.
//!
//! Each requirement check produces a `PackageStatus` describing what was
//! found and what, if anything, was done about it.

use serde::Serialize;
use std::fmt;

/// The result of ensuring a single package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    /// Installed and satisfies the pin, or an install just succeeded.
    UpToDate,

    /// Installed but does not satisfy the pin, and installing was not allowed.
    OutDated,

    /// Pinned by commit, but the installed package has no VCS provenance.
    NotVcsPackage,

    /// Pinned by commit, but the installed package came from a non-git VCS.
    NotGitPackage,

    /// Installed, and presence alone was enough.
    Found,

    /// Not installed, and installing was not allowed.
    NotFound,

    /// The install command failed.
    Failed,
}

impl PackageStatus {
    /// Whether the package is present in the desired state.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, PackageStatus::UpToDate | PackageStatus::Found)
    }

    /// Stable snake_case label.
    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::UpToDate => "up_to_date",
            PackageStatus::OutDated => "out_dated",
            PackageStatus::NotVcsPackage => "not_vcs_package",
            PackageStatus::NotGitPackage => "not_git_package",
            PackageStatus::Found => "found",
            PackageStatus::NotFound => "not_found",
            PackageStatus::Failed => "failed",
        }
    }

    /// Process exit code for this status.
    pub fn exit_code(&self) -> i32 {
        match self {
            PackageStatus::UpToDate | PackageStatus::Found => 0,
            PackageStatus::Failed => 1,
            PackageStatus::NotFound => 3,
            PackageStatus::OutDated => 4,
            PackageStatus::NotVcsPackage | PackageStatus::NotGitPackage => 5,
        }
    }

    /// Relative badness, used to pick the overall result of a batch.
    pub fn severity(&self) -> u8 {
        match self {
            PackageStatus::UpToDate | PackageStatus::Found => 0,
            PackageStatus::NotFound => 1,
            PackageStatus::OutDated => 2,
            PackageStatus::NotVcsPackage | PackageStatus::NotGitPackage => 3,
            PackageStatus::Failed => 4,
        }
    }

    /// The most severe of `statuses`, or `UpToDate` for none.
    pub fn worst<I: IntoIterator<Item = PackageStatus>>(statuses: I) -> PackageStatus {
        statuses
            .into_iter()
            .max_by_key(|status| status.severity())
            .unwrap_or(PackageStatus::UpToDate)
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
