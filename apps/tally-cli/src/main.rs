//! # Tally Entry Point
//!
//! The actual setup lives in lib.rs for better testability.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tally_cli::Cli;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tally_cli::init_tracing();

    tally_cli::run(&cli).context("Checkout failed")?;
    Ok(())
}
