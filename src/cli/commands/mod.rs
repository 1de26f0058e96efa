//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which also builds the
//! [`InterpreterTarget`] shared by every subcommand from the global flags.

pub mod dispatcher;
pub mod display;
pub mod require;
pub mod require_git;
pub mod show;
pub mod sync;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, InterpreterTarget};
