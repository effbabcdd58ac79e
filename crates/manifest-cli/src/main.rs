//! Manifest resolver CLI
//!
//! Prints the project manifests an analyzer should load for a directory.

mod cli;
mod error;
mod logging;
mod resolve;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let manifests = resolve::run_resolve(&cli)?;
    print!("{}", resolve::render(&manifests, cli.json)?);
    Ok(())
}
