//! Command-line interface for pipensure.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, RequireArgs, RequireGitArgs, ShowArgs, SyncArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, InterpreterTarget};
