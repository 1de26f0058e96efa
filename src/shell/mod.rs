//! Child process execution.

pub mod command;

pub use command::{execute, CommandResult};
