//! Show command implementation.
//!
//! `pipensure show <name>` prints the installed version and where the
//! package came from.

use crate::cli::args::ShowArgs;
use crate::error::{EnsureError, Result};
use crate::installer::DEFAULT_PYTHON;
use crate::package::find_installed;
use crate::report::Reporter;
use crate::requirements::PackageStatus;

use super::dispatcher::{Command, CommandResult, InterpreterTarget};
use super::display;

/// The show command implementation.
pub struct ShowCommand {
    target: InterpreterTarget,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(target: InterpreterTarget, args: ShowArgs) -> Self {
        Self { target, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let environment = self.target.environment(DEFAULT_PYTHON)?;

        let Some(package) = find_installed(&environment, &self.args.name, reporter)? else {
            reporter.error(&format!("Package '{}' is not installed", self.args.name));
            return Ok(CommandResult::from_status(PackageStatus::NotFound));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&package)
                .map_err(|e| EnsureError::Other(e.into()))?;
            reporter.info(&json);
        } else {
            reporter.info(&format!("{} {}", package.name, package.version));
            reporter.info(&format!("Location: {}", package.location.display()));
            reporter.info(&format!("Source: {}", display::describe_source(&package)));
        }

        Ok(CommandResult::success())
    }
}
