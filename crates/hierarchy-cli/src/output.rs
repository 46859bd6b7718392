//! Table and JSON output formatting for CLI commands.

use hierarchy_core::error::AppError;
use hierarchy_entity::folder::{Folder, FolderNode, FolderTree};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Folder display row
#[derive(Debug, Tabled)]
pub struct FolderRow {
    /// Name
    name: String,
    /// Organization
    organization_id: String,
    /// Path
    path: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            organization_id: folder.organization_id.to_string(),
            path: folder.path.clone(),
        }
    }
}

/// Print folders in the selected format.
///
/// JSON output uses the record shape so it can be fed back via `--input`.
pub fn print_folders(folders: &[Folder], format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            if folders.is_empty() {
                println!("No folders found.");
            } else {
                let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
                println!("{}", Table::new(rows));
            }
            Ok(())
        }
        OutputFormat::Json => hierarchy_service::io::write_folders(std::io::stdout().lock(), folders),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a folder tree as indented branches, or as JSON.
pub fn print_tree(tree: &FolderTree, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_item(tree, format);
        return;
    }

    if tree.is_empty() {
        println!("No folders found.");
        return;
    }

    for root in &tree.roots {
        print_node(root, 0);
    }
    println!("({} folders)", tree.total_folders);
}

fn print_node(node: &FolderNode, level: usize) {
    if level == 0 {
        println!("{}/", node.name);
    } else {
        println!("{}├── {}/", "  ".repeat(level - 1), node.name);
    }
    for child in &node.children {
        print_node(child, level + 1);
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    eprintln!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}
