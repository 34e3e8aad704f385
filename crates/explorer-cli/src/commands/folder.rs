//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_entity::FolderNode;
use explorer_service::{CreateFolderRequest, FolderService, TreeService};

use crate::output::{self, OutputFormat};

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
    /// Show the folder tree
    Tree {
        /// Max depth (roots are depth 0)
        #[arg(short, long)]
        depth: Option<usize>,
    },
    /// Show one folder
    Show {
        /// Folder ID
        id: i64,
    },
    /// List the direct subfolders of a folder
    Subfolders {
        /// Folder ID
        id: i64,
    },
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent_id: Option<i64>,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: i64,
    /// Name
    name: String,
    /// Path
    path: String,
    /// Parent ID
    parent: String,
    /// Created at
    created_at: String,
}

impl From<&FolderNode> for FolderRow {
    fn from(f: &FolderNode) -> Self {
        Self {
            id: f.id,
            name: f.name.clone(),
            path: f.path.clone(),
            parent: f
                .parent_id
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            created_at: f.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let result = run(args, &stores, format).await;
    stores.close().await;
    result
}

async fn run(
    args: &FolderArgs,
    stores: &explorer_api::app::Stores,
    format: OutputFormat,
) -> Result<(), AppError> {
    let folder_service = FolderService::new(stores.folders.clone());

    match &args.command {
        FolderCommand::Tree { depth } => {
            let tree = TreeService::new(stores.folders.clone()).get_tree().await?;
            match format {
                OutputFormat::Json => output::print_json(&tree, "[]"),
                OutputFormat::Table if tree.is_empty() => println!("No folders yet."),
                OutputFormat::Table => {
                    println!("/");
                    for line in render_tree(&tree, *depth) {
                        println!("{line}");
                    }
                }
            }
        }
        FolderCommand::Show { id } => {
            let folder = folder_service.get_folder(*id).await?;
            output::print_item(&FolderRow::from(&folder), format);
        }
        FolderCommand::Subfolders { id } => {
            let rows: Vec<FolderRow> = folder_service
                .list_subfolders(*id)
                .await?
                .iter()
                .map(FolderRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Create { name, parent_id } => {
            let folder = folder_service
                .create_folder(CreateFolderRequest {
                    parent_id: *parent_id,
                    name: name.clone(),
                })
                .await?;
            output::print_success(&format!(
                "Folder '{}' created (id: {})",
                folder.path, folder.id
            ));
        }
    }

    Ok(())
}

/// Draw the forest with box-drawing connectors, one line per folder.
fn render_tree(nodes: &[FolderNode], max_depth: Option<usize>) -> Vec<String> {
    let mut out = Vec::new();
    // Connector column contributed by each ancestor of the next node.
    let mut columns: Vec<&str> = Vec::new();
    let mut pending: Vec<(&FolderNode, usize, bool)> = siblings(nodes, 0).collect();

    while let Some((node, depth, last)) = pending.pop() {
        columns.truncate(depth);
        let branch = if last { "└── " } else { "├── " };
        out.push(format!("{}{branch}{}/", columns.concat(), node.name));

        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        columns.push(if last { "    " } else { "│   " });
        pending.extend(siblings(&node.children, depth + 1));
    }
    out
}

/// `(node, depth, is_last)` in reverse, so popping yields them in order.
fn siblings(
    nodes: &[FolderNode],
    depth: usize,
) -> impl Iterator<Item = (&FolderNode, usize, bool)> {
    nodes
        .iter()
        .enumerate()
        .rev()
        .map(move |(i, node)| (node, depth, i + 1 == nodes.len()))
}
