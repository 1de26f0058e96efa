//! Require-git command implementation.
//!
//! `pipensure require-git <name> <owner/repo> [--commit ID]` ensures a
//! package installed from a git repository.

use crate::cli::args::RequireGitArgs;
use crate::error::Result;
use crate::installer::{PipInstaller, DEFAULT_PYTHON};
use crate::report::Reporter;
use crate::requirements::{GitRequireOptions, PackageEnsurer};

use super::dispatcher::{Command, CommandResult, InterpreterTarget};
use super::display;

/// The require-git command implementation.
pub struct RequireGitCommand {
    target: InterpreterTarget,
    args: RequireGitArgs,
}

impl RequireGitCommand {
    /// Create a new require-git command.
    pub fn new(target: InterpreterTarget, args: RequireGitArgs) -> Self {
        Self { target, args }
    }

    fn options(&self) -> GitRequireOptions {
        GitRequireOptions {
            pin_commit_id: self.args.commit.clone(),
            only_update_existing: self.args.only_update_existing,
            warn_instead_of_error: !self.args.strict,
            repo_hostname: self.args.host.clone(),
            check_only: self.args.check,
        }
    }
}

impl Command for RequireGitCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let environment = self.target.environment(DEFAULT_PYTHON)?;
        let installer = PipInstaller::new(self.target.python_or(DEFAULT_PYTHON));

        let status = PackageEnsurer::new(&environment, &installer).require_git_package(
            &self.args.name,
            &self.args.repo,
            &self.options(),
            reporter,
        )?;

        display::show_package_status(reporter, &self.args.name, status);
        Ok(CommandResult::from_status(status))
    }
}
