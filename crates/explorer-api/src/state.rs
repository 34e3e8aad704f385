//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use explorer_core::config::AppConfig;
use explorer_database::store::{FileStore, FolderStore};
use explorer_service::file::FileService;
use explorer_service::folder::{FolderService, TreeService};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Folder store, used directly for health checks.
    pub folder_store: Arc<dyn FolderStore>,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// File service.
    pub file_service: Arc<FileService>,
    /// Tree service.
    pub tree_service: Arc<TreeService>,
}

impl AppState {
    /// Wires the services over the given store handles.
    pub fn new(
        config: AppConfig,
        folder_store: Arc<dyn FolderStore>,
        file_store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            folder_service: Arc::new(FolderService::new(Arc::clone(&folder_store))),
            file_service: Arc::new(FileService::new(file_store, Arc::clone(&folder_store))),
            tree_service: Arc::new(TreeService::new(Arc::clone(&folder_store))),
            folder_store,
        }
    }
}
