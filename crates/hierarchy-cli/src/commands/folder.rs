//! Folder query and move commands.

use clap::{Args, Subcommand};
use tracing::info;

use crate::output::{self, OutputFormat};
use hierarchy_core::config::AppConfig;
use hierarchy_core::error::AppError;
use hierarchy_service::build_tree;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List every folder of an organization
    List {
        /// Organization ID
        #[arg(short, long)]
        org: String,
    },
    /// List all descendants of a named folder
    Children {
        /// Organization ID
        #[arg(short, long)]
        org: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Move a folder and its subtree under another folder
    Move {
        /// Name of the folder to move
        #[arg(short, long)]
        name: String,
        /// Name of the new parent folder
        #[arg(short, long)]
        to: String,
    },
    /// Show an organization's folder tree
    Tree {
        /// Organization ID
        #[arg(short, long)]
        org: String,
    },
}

/// Execute folder commands
pub fn execute(
    args: &FolderArgs,
    input: Option<&str>,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::load_store(input, config)?;

    match &args.command {
        FolderCommand::List { org } => {
            let org = super::parse_org(org)?;
            let folders = store.get_folders_by_org_id(org);
            output::print_folders(&folders, format)?;
        }
        FolderCommand::Children { org, name } => {
            let org = super::parse_org(org)?;
            let folders = store.get_all_child_folders(org, name)?;
            output::print_folders(&folders, format)?;
        }
        FolderCommand::Move { name, to } => {
            let folders = store.move_folder(name, to)?;
            info!(source = %name, destination = %to, total = folders.len(), "Move applied to collection");
            output::print_folders(&folders, format)?;
            output::print_success(&format!("Folder '{}' moved under '{}'", name, to));
        }
        FolderCommand::Tree { org } => {
            let org = super::parse_org(org)?;
            let tree = build_tree(store.folders(), org, store.codec());
            output::print_tree(&tree, format);
        }
    }

    Ok(())
}
