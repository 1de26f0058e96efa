//! pipensure CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pipensure::cli::{Cli, CommandDispatcher};
use pipensure::logging::init_tracing;
use pipensure::report::{ConsoleReporter, Reporter, Verbosity};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pipensure starting with args: {:?}", cli);

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.debug {
        Verbosity::Debug
    } else {
        Verbosity::Normal
    };
    let mut reporter = ConsoleReporter::new(verbosity);

    let working_dir = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, &mut reporter) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            reporter.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
