//! File creation and listing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_database::store::{FileStore, FolderStore};
use explorer_entity::file::{FileItem, NewFileItem};

use crate::naming;

/// Input for [`FileService::create_file`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFileRequest {
    /// Containing folder ID.
    pub folder_id: i64,
    /// Requested name, sanitized before use.
    pub name: String,
    /// `None` derives the type from the name; `Some(None)` stores no type.
    pub file_type: Option<Option<String>>,
    /// Size in bytes; missing or non-finite sizes are stored as 0.
    pub file_size: Option<f64>,
}

/// Handles file creation and reads.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File rows.
    file_store: Arc<dyn FileStore>,
    /// Folder rows (for containing-folder lookups).
    folder_store: Arc<dyn FolderStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(file_store: Arc<dyn FileStore>, folder_store: Arc<dyn FolderStore>) -> Self {
        Self {
            file_store,
            folder_store,
        }
    }

    /// Files directly in `folder_id`, by type (untyped last) then name.
    ///
    /// An unknown folder yields an empty list.
    pub async fn list_files(&self, folder_id: i64) -> AppResult<Vec<FileItem>> {
        self.file_store.find_by_folder(folder_id).await
    }

    /// Gets a file by ID.
    pub async fn get_file(&self, file_id: i64) -> AppResult<FileItem> {
        self.file_store
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Creates a file inside an existing folder.
    pub async fn create_file(&self, req: CreateFileRequest) -> AppResult<FileItem> {
        let folder = self
            .folder_store
            .find_by_id(req.folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        let name = naming::require_name(&req.name, "File name required")?;
        let file_size = naming::normalize_file_size(req.file_size)?;
        let file_type = naming::resolve_file_type(req.file_type, &name);
        let path = naming::child_path(Some(&folder.path), &name);

        let record = NewFileItem {
            name,
            folder_id: folder.id,
            file_type,
            file_size,
            path,
        };

        let file = self.file_store.create(&record).await.map_err(|e| {
            if e.is(ErrorKind::Conflict) {
                debug!(path = %record.path, "File path already taken");
                AppError::conflict("A file with this name already exists here")
            } else {
                e
            }
        })?;

        info!(
            file_id = file.id,
            folder_id = file.folder_id,
            path = %file.path,
            size = file.file_size,
            "File created"
        );

        Ok(file)
    }
}
