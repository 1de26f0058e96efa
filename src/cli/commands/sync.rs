//! Sync command implementation.
//!
//! `pipensure sync` ensures every package listed in `pipensure.yml`, in
//! order, and exits with the code of the worst outcome.

use std::path::{Path, PathBuf};

use crate::cli::args::SyncArgs;
use crate::config::{load_manifest, manifest_path, PackageRequest};
use crate::error::{EnsureError, Result};
use crate::installer::PipInstaller;
use crate::report::Reporter;
use crate::requirements::{PackageEnsurer, PackageStatus};

use super::dispatcher::{Command, CommandResult, InterpreterTarget};
use super::display;

/// The sync command implementation.
pub struct SyncCommand {
    working_dir: PathBuf,
    target: InterpreterTarget,
    args: SyncArgs,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(working_dir: &Path, target: InterpreterTarget, args: SyncArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            target,
            args,
        }
    }
}

impl Command for SyncCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let path = manifest_path(self.args.file.as_deref(), &self.working_dir);
        let mut config = match load_manifest(&path) {
            Ok(config) => config,
            Err(EnsureError::ManifestNotFound { path }) => {
                reporter.error(&format!("No manifest found at {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.strict {
            config.settings.warn_instead_of_error = false;
        }

        if config.packages.is_empty() {
            reporter.info(&format!("No packages listed in {}", path.display()));
            return Ok(CommandResult::success());
        }

        let environment = self.target.environment(&config.settings.python)?;
        let installer = PipInstaller::from_settings(&config.settings, self.target.python());
        let ensurer = PackageEnsurer::new(&environment, &installer);

        let mut statuses = Vec::with_capacity(config.packages.len());
        for entry in &config.packages {
            let status = match entry.request(&config.settings, self.args.check) {
                PackageRequest::Index(options) => {
                    ensurer.require_package(&entry.name, &options, reporter)?
                }
                PackageRequest::Git { repo_path, options } => {
                    ensurer.require_git_package(&entry.name, &repo_path, &options, reporter)?
                }
            };
            display::show_package_status(reporter, &entry.name, status);
            statuses.push(status);
        }

        let satisfied = statuses.iter().filter(|s| s.is_satisfied()).count();
        reporter.info(&format!(
            "{} of {} package(s) satisfied",
            satisfied,
            statuses.len()
        ));

        Ok(CommandResult::from_status(PackageStatus::worst(statuses)))
    }
}
