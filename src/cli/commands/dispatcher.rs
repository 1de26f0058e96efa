//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`InterpreterTarget`] for the environment a command inspects
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::package::SitePackages;
use crate::report::Reporter;
use crate::requirements::PackageStatus;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting progress through `reporter`.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result carrying the exit code of `status`.
    pub fn from_status(status: PackageStatus) -> Self {
        if status.is_satisfied() {
            Self::success()
        } else {
            Self::failure(status.exit_code())
        }
    }
}

/// The interpreter and search path a command works against.
#[derive(Debug, Clone, Default)]
pub struct InterpreterTarget {
    python: Option<String>,
    site_packages: Vec<PathBuf>,
}

impl InterpreterTarget {
    /// Create a target from the global CLI options.
    pub fn new(python: Option<String>, site_packages: Vec<PathBuf>) -> Self {
        Self {
            python,
            site_packages,
        }
    }

    /// Interpreter given on the command line, if any.
    pub fn python(&self) -> Option<&str> {
        self.python.as_deref()
    }

    /// Interpreter given on the command line, else `fallback`.
    pub fn python_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.python.as_deref().unwrap_or(fallback)
    }

    /// Installed-package environment to inspect.
    ///
    /// Explicit `--site-packages` directories win; otherwise the
    /// interpreter is asked for its `sys.path`.
    pub fn environment(&self, fallback_python: &str) -> Result<SitePackages> {
        if !self.site_packages.is_empty() {
            return Ok(SitePackages::new(self.site_packages.clone()));
        }
        SitePackages::discover(self.python_or(fallback_python))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher resolving relative paths against `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let target = InterpreterTarget::new(cli.python.clone(), cli.site_packages.clone());

        match &cli.command {
            Commands::Require(args) => {
                let cmd = super::require::RequireCommand::new(target, args.clone());
                cmd.execute(reporter)
            }
            Commands::RequireGit(args) => {
                let cmd = super::require_git::RequireGitCommand::new(target, args.clone());
                cmd.execute(reporter)
            }
            Commands::Sync(args) => {
                let cmd = super::sync::SyncCommand::new(&self.working_dir, target, args.clone());
                cmd.execute(reporter)
            }
            Commands::Show(args) => {
                let cmd = super::show::ShowCommand::new(target, args.clone());
                cmd.execute(reporter)
            }
        }
    }
}
