//! File management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_entity::FileItem;
use explorer_service::{CreateFileRequest, FileService};

use crate::output::{self, OutputFormat};

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// List the files in a folder
    List {
        /// Folder ID
        #[arg(short, long)]
        folder_id: i64,
    },
    /// Show one file
    Show {
        /// File ID
        id: i64,
    },
    /// Create a file record
    Create {
        /// Containing folder ID
        #[arg(short, long)]
        folder_id: i64,
        /// File name
        #[arg(short, long)]
        name: String,
        /// Type label (derived from the extension when omitted)
        #[arg(short = 't', long = "type")]
        file_type: Option<String>,
        /// Store no type, even if the name has an extension
        #[arg(long, conflicts_with = "file_type")]
        untyped: bool,
        /// Size in bytes
        #[arg(short, long)]
        size: Option<f64>,
    },
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// File ID
    id: i64,
    /// Name
    name: String,
    /// Type
    #[tabled(rename = "type")]
    file_type: String,
    /// Size in bytes
    size: i64,
    /// Path
    path: String,
}

impl From<&FileItem> for FileRow {
    fn from(f: &FileItem) -> Self {
        Self {
            id: f.id,
            name: f.name.clone(),
            file_type: f.file_type.clone().unwrap_or_else(|| "-".to_string()),
            size: f.file_size,
            path: f.path.clone(),
        }
    }
}

/// Execute file commands
pub async fn execute(
    args: &FileArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let file_service = FileService::new(stores.files.clone(), stores.folders.clone());

    let result = match &args.command {
        FileCommand::List { folder_id } => file_service.list_files(*folder_id).await.map(|files| {
            let rows: Vec<FileRow> = files.iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
        }),
        FileCommand::Show { id } => file_service
            .get_file(*id)
            .await
            .map(|file| output::print_item(&FileRow::from(&file), format)),
        FileCommand::Create {
            folder_id,
            name,
            file_type,
            untyped,
            size,
        } => {
            let file_type = if *untyped {
                Some(None)
            } else {
                file_type.clone().map(Some)
            };
            file_service
                .create_file(CreateFileRequest {
                    folder_id: *folder_id,
                    name: name.clone(),
                    file_type,
                    file_size: *size,
                })
                .await
                .map(|file| {
                    output::print_success(&format!(
                        "File '{}' created (id: {})",
                        file.path, file.id
                    ))
                })
        }
    };

    stores.close().await;
    result
}
