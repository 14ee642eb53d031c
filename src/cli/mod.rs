//! Command-line interface.

pub mod drag;
pub mod output;
pub mod quote;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RuPaul - The Queen of Nais!
#[derive(Parser)]
#[command(
    name = "rupaul",
    about = "The Queen of Nais!",
    long_about = "RuPaul helps you run a nais app locally with docker-compose.",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Drag secrets from Vault, and generate a companion docker-compose file
    Drag {
        /// Path to the naiserator yaml
        manifest: PathBuf,

        /// Ignored
        #[arg(hide = true)]
        rest: Vec<String>,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Drag { manifest, .. } => drag::execute(&manifest),
    }
}
