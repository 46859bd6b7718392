//! Folder hierarchy CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use hierarchy_core::config::AppConfig;
use hierarchy_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if cli.requires_valid_config() {
        if let Err(e) = config.validate() {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    }

    init_logging(&config.logging);
    tracing::debug!(
        config = %cli.config,
        delimiter = %config.hierarchy.delimiter,
        boundary = config.hierarchy.boundary.as_str(),
        "Configuration loaded"
    );

    if let Err(e) = cli.execute(&config) {
        tracing::error!(kind = %e.kind, "Command failed: {}", e.message);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging on stderr so stdout stays parseable.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
