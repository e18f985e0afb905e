//! Kata CLI binary.

mod catalog;
mod cli;
mod demo;
mod inspect;
mod social;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with demo output.
    // Example: RUST_LOG=kata_graph=debug kata run datastructures graph
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kata=info,kata_graph=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting kata CLI");

    let cli = Cli::parse();
    cli.execute(&mut std::io::stdout().lock())?;

    tracing::debug!("Kata CLI completed successfully");
    Ok(())
}
