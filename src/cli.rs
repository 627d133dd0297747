use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Roseau argument guard checker.
#[derive(Parser)]
#[command(
    name = "roseau",
    version,
    about = "Checks date ordering and sequence lengths declared in a TOML manifest"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run every check declared in a manifest.
    Check(CheckArgs),
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML manifest of checks.
    #[arg(short, long, default_value = "roseau.toml")]
    pub config: PathBuf,
}
