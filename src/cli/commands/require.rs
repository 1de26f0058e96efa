//! Require command implementation.
//!
//! `pipensure require <name> [--pin SPEC]` ensures a package from the
//! package index.

use crate::cli::args::RequireArgs;
use crate::error::Result;
use crate::installer::{PipInstaller, DEFAULT_PYTHON};
use crate::report::Reporter;
use crate::requirements::{PackageEnsurer, RequireOptions};

use super::dispatcher::{Command, CommandResult, InterpreterTarget};
use super::display;

/// The require command implementation.
pub struct RequireCommand {
    target: InterpreterTarget,
    args: RequireArgs,
}

impl RequireCommand {
    /// Create a new require command.
    pub fn new(target: InterpreterTarget, args: RequireArgs) -> Self {
        Self { target, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RequireArgs {
        &self.args
    }

    fn options(&self) -> RequireOptions {
        RequireOptions {
            pin_version: self.args.pin.clone(),
            only_update_existing: self.args.only_update_existing,
            warn_instead_of_error: !self.args.strict,
            check_only: self.args.check,
        }
    }
}

impl Command for RequireCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let environment = self.target.environment(DEFAULT_PYTHON)?;
        let installer = PipInstaller::new(self.target.python_or(DEFAULT_PYTHON));

        let status = PackageEnsurer::new(&environment, &installer).require_package(
            &self.args.name,
            &self.options(),
            reporter,
        )?;

        display::show_package_status(reporter, &self.args.name, status);
        Ok(CommandResult::from_status(status))
    }
}
