//! RuPaul - The Queen of Nais!

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rupaul::cli::output;
use rupaul::cli::{execute, Cli};
use rupaul::core::constants;

fn main() {
    // Usage errors exit 1 like every other failure
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("rupaul=debug")
        } else {
            EnvFilter::new("rupaul=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
