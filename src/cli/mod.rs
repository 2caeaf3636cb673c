//! CLI argument parsing for snag.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// Snag: pre-commit guard that blocks staged DONOTCOMMIT markers.
///
/// Snag reads the staged diff (`git diff --cached`), scans the added lines
/// for do-not-ship marker phrases, and exits non-zero when any are found
/// so the commit is aborted.
#[derive(Parser, Debug)]
#[command(name = "snag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for snag.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the staged diff for DONOTCOMMIT markers.
    ///
    /// Exits 1 and prints the flagged hunks when markers are found in
    /// added lines; exits 0 silently otherwise. This is what the
    /// installed pre-commit hook runs.
    Check(CheckArgs),

    /// Install the pre-commit hook into the current repository.
    ///
    /// Writes an executable hook that runs `snag check` before every
    /// commit.
    Install(InstallArgs),

    /// Show the marker phrases, patterns, and exclusions in effect.
    ///
    /// Reads `.snag.yaml` when present, so the output reflects exactly
    /// what `check` would scan for.
    Markers,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Emit findings as JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Overwrite an existing pre-commit hook that snag did not install.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
