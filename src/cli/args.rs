//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pipensure - Make sure Python packages are installed at the version you need.
#[derive(Debug, Parser)]
#[command(name = "pipensure")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Python interpreter used to run pip and locate site-packages
    #[arg(long, global = true, env = "PIPENSURE_PYTHON")]
    pub python: Option<String>,

    /// Search these directories instead of asking the interpreter (repeatable)
    #[arg(long = "site-packages", global = true, value_name = "DIR")]
    pub site_packages: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ensure a package from the package index
    Require(RequireArgs),

    /// Ensure a package installed from a git repository
    RequireGit(RequireGitArgs),

    /// Ensure every package listed in a manifest
    Sync(SyncArgs),

    /// Show an installed package
    Show(ShowArgs),
}

/// Arguments for the `require` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RequireArgs {
    /// Package name
    pub name: String,

    /// Version pin, e.g. ">=2.0" or "1.4.2"
    #[arg(long, value_name = "SPEC")]
    pub pin: Option<String>,

    /// Do not install the package if it is missing
    #[arg(long)]
    pub only_update_existing: bool,

    /// Fail instead of warning when the install fails
    #[arg(long)]
    pub strict: bool,

    /// Report what would be done without installing
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `require-git` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RequireGitArgs {
    /// Package name
    pub name: String,

    /// Repository path on the git host, e.g. "org/repo"
    pub repo: String,

    /// Commit the installed package must be built from
    #[arg(long, value_name = "ID")]
    pub commit: Option<String>,

    /// Git host, with or without scheme
    #[arg(long, default_value = crate::requirements::DEFAULT_REPO_HOSTNAME)]
    pub host: String,

    /// Do not install the package if it is missing
    #[arg(long)]
    pub only_update_existing: bool,

    /// Fail instead of warning on install failures and non-git installs
    #[arg(long)]
    pub strict: bool,

    /// Report what would be done without installing
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SyncArgs {
    /// Manifest to read (default: ./pipensure.yml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Fail on the first package that cannot be ensured
    #[arg(long)]
    pub strict: bool,

    /// Report what would be done without installing
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Package name
    pub name: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_require_with_pin() {
        let cli = Cli::try_parse_from(["pipensure", "require", "requests", "--pin", ">=2.0"])
            .unwrap();
        match cli.command {
            Commands::Require(args) => {
                assert_eq!(args.name, "requests");
                assert_eq!(args.pin.as_deref(), Some(">=2.0"));
                assert!(!args.strict);
            }
            other => panic!("Expected require, got {:?}", other),
        }
    }

    #[test]
    fn parses_require_git_with_defaults() {
        let cli = Cli::try_parse_from(["pipensure", "require-git", "mylib", "org/mylib"]).unwrap();
        match cli.command {
            Commands::RequireGit(args) => {
                assert_eq!(args.repo, "org/mylib");
                assert_eq!(args.host, "github.com");
                assert!(args.commit.is_none());
            }
            other => panic!("Expected require-git, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pipensure",
            "show",
            "foo",
            "--site-packages",
            "/a",
            "--site-packages",
            "/b",
            "--debug",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(
            cli.site_packages,
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn quiet_conflicts_with_debug() {
        assert!(Cli::try_parse_from(["pipensure", "--quiet", "--debug", "show", "foo"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["pipensure"]).is_err());
    }
}
