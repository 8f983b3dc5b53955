//! Sitepack CLI - static site dist bundle assembler.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "sitepack")]
#[command(about = "Assemble the static site dist bundle")]
#[command(version)]
pub struct Cli {
    /// Remove the existing dist directory before assembling
    #[arg(long)]
    clean: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    commands::build::run(cli.clean)?;

    Ok(())
}
