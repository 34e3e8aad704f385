//! Folder creation and lookup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_database::store::FolderStore;
use explorer_entity::folder::{Folder, FolderNode, NewFolder};

use crate::naming;

/// Input for [`FolderService::create_folder`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Parent folder ID (`None` for a root folder).
    pub parent_id: Option<i64>,
    /// Requested name, sanitized before use.
    pub name: String,
}

/// Manages folder creation and reads.
#[derive(Debug, Clone)]
pub struct FolderService {
    folder_store: Arc<dyn FolderStore>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_store: Arc<dyn FolderStore>) -> Self {
        Self { folder_store }
    }

    /// Gets a folder by ID, without children.
    pub async fn get_folder(&self, folder_id: i64) -> AppResult<FolderNode> {
        self.folder_store
            .find_by_id(folder_id)
            .await?
            .map(FolderNode::from)
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Lists the direct subfolders of a folder, names ascending.
    ///
    /// An unknown folder simply has no subfolders.
    pub async fn list_subfolders(&self, folder_id: i64) -> AppResult<Vec<FolderNode>> {
        let children = self.folder_store.find_children(folder_id).await?;
        Ok(children.into_iter().map(FolderNode::from).collect())
    }

    /// Creates a folder under `parent_id`, or a root folder.
    pub async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<Folder> {
        let name = naming::require_name(&req.name, "Folder name required")?;

        let parent_path = match req.parent_id {
            Some(parent_id) => Some(self.require_parent(parent_id).await?.path),
            None => None,
        };
        let path = naming::child_path(parent_path.as_deref(), &name);

        let record = NewFolder {
            name,
            path,
            parent_id: req.parent_id,
        };

        let folder = self.folder_store.create(&record).await.map_err(|e| {
            if e.is(ErrorKind::Conflict) {
                debug!(path = %record.path, "Folder path already taken");
                AppError::conflict("A folder with this name already exists here")
            } else {
                e
            }
        })?;

        info!(
            folder_id = folder.id,
            parent_id = ?folder.parent_id,
            path = %folder.path,
            "Folder created"
        );

        Ok(folder)
    }

    async fn require_parent(&self, parent_id: i64) -> AppResult<Folder> {
        self.folder_store
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Parent folder not found"))
    }
}
