//! Sample data commands.

use std::io::{BufWriter, Write};

use clap::Args;

use crate::output::{self, OutputFormat};
use hierarchy_core::config::AppConfig;
use hierarchy_core::error::AppError;
use hierarchy_entity::folder::Folder;
use hierarchy_service::io::write_folders;
use hierarchy_service::{PathCodec, generate_sample};

/// Arguments for sample generation
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Write the collection to this JSON file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the number of organizations
    #[arg(long)]
    pub organizations: Option<usize>,
}

/// Execute sample generation
pub fn execute(args: &SampleArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let mut sample = config.sample.clone();
    if let Some(organizations) = args.organizations {
        if organizations == 0 {
            return Err(AppError::bad_request("--organizations must be at least 1"));
        }
        sample.organizations = organizations;
    }

    let folders = generate_sample(&sample, &PathCodec::from_config(&config.hierarchy));

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .map_err(|e| AppError::storage(format!("Failed to create '{}': {}", path, e)))?;
            write_buffered(file, &folders)?;
            output::print_success(&format!("{} folders written to '{}'", folders.len(), path));
        }
        None => output::print_folders(&folders, format)?,
    }

    Ok(())
}

/// Writes the collection through a buffer and flushes it.
fn write_buffered<W: Write>(inner: W, folders: &[Folder]) -> Result<(), AppError> {
    let mut writer = BufWriter::new(inner);
    write_folders(&mut writer, folders)?;
    writer.flush()?;
    Ok(())
}
