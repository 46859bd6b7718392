//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;
pub mod sample;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use hierarchy_core::config::AppConfig;
use hierarchy_core::error::AppError;
use hierarchy_core::types::OrganizationId;
use hierarchy_service::io::load_folders;
use hierarchy_service::{HierarchyStore, PathCodec, generate_sample};

/// Query and move folders in a multi-tenant path-encoded hierarchy
#[derive(Debug, Parser)]
#[command(name = "folder-hierarchy", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// JSON file with the folder collection (sample data when omitted)
    #[arg(short, long, global = true)]
    pub input: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder queries and moves
    Folder(folder::FolderArgs),
    /// Sample data generation
    Sample(sample::SampleArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Whether the command needs a validated configuration.
    ///
    /// `config` commands inspect the configuration themselves, so they run
    /// even when it is invalid.
    pub fn requires_valid_config(&self) -> bool {
        !matches!(self.command, Commands::Config(_))
    }

    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, self.input.as_deref(), config, self.format),
            Commands::Sample(args) => sample::execute(args, config, self.format),
            Commands::Config(args) => config::execute(args, &self.config, config, self.format),
        }
    }
}

/// Helper: build the store from `--input`, or from generated sample data.
pub fn load_store(input: Option<&str>, config: &AppConfig) -> Result<HierarchyStore, AppError> {
    let codec = PathCodec::from_config(&config.hierarchy);
    let folders = match input {
        Some(path) => load_folders(path)?,
        None => {
            tracing::info!("No input collection given, generating sample folders");
            generate_sample(&config.sample, &codec)
        }
    };

    Ok(HierarchyStore::with_codec(folders, codec))
}

/// Helper: parse an organization identifier argument.
pub fn parse_org(value: &str) -> Result<OrganizationId, AppError> {
    value
        .parse()
        .map_err(|e| AppError::bad_request(format!("Invalid organization UUID '{}': {}", value, e)))
}
