//! Savebank CLI - runs the account demonstration scenario
//!
//! Usage:
//! ```bash
//! savebank
//! savebank --format json
//! savebank --config scenario.toml
//! RUST_LOG=debug savebank
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod scenario;

use config::ScenarioConfig;

/// Savebank - checking and savings accounts exercised through one capability
#[derive(Parser)]
#[command(name = "savebank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scenario config file (TOML); defaults are used when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the balance lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ScenarioConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let outcome = scenario::run(&config)?;

    match cli.format {
        OutputFormat::Text => print!("{}", outcome.render_text()),
        OutputFormat::Json => println!("{}", outcome.render_json()?),
    }

    Ok(())
}
