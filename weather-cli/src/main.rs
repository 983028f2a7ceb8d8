//! Binary crate for the `i3blocks-weather` block.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logger setup (stderr, so stdout carries only the status line)
//! - Wiring the HTTP and D-Bus collaborators into the core pipeline

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
