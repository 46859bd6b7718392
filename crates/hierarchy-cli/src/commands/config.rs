//! Configuration inspection commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use hierarchy_core::config::AppConfig;
use hierarchy_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            let config = AppConfig::load(config_path)?;
            match config.validate() {
                Ok(()) => {
                    output::print_success(&format!("Configuration '{}' is valid", config_path));
                    println!("  Delimiter: {:?}", config.hierarchy.delimiter);
                    println!("  Boundary:  {}", config.hierarchy.boundary.as_str());
                    println!("  Logging:   {} ({})", config.logging.level, config.logging.format);
                }
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {}", e));
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
