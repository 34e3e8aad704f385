//! The store collaborator contract used by the hierarchy services.
//!
//! Implementations must surface a path uniqueness violation on insert as
//! [`ErrorKind::Conflict`](explorer_core::ErrorKind::Conflict) and nothing
//! else; the services rely on that to report duplicates.
//!
//! Names and types compare by their UTF-8 bytes, so `"Banana"` sorts before
//! `"apple"` in every implementation.

use async_trait::async_trait;

use explorer_core::result::AppResult;
use explorer_entity::{FileItem, Folder, NewFileItem, NewFolder};

/// Keyed access to folder rows.
#[async_trait]
pub trait FolderStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a folder by ID.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>>;

    /// Find a folder by its unique path.
    async fn find_by_path(&self, path: &str) -> AppResult<Option<Folder>>;

    /// All folders ordered by name ascending, then id.
    async fn find_all(&self) -> AppResult<Vec<Folder>>;

    /// Direct children of `parent_id`, ordered by name ascending, then id.
    async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Folder>>;

    /// Insert a folder; a duplicate path yields a conflict error.
    async fn create(&self, data: &NewFolder) -> AppResult<Folder>;

    /// Insert or, when the path exists, update `name` and `parent_id`.
    async fn upsert_by_path(&self, data: &NewFolder) -> AppResult<Folder>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Keyed access to file rows.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a file by ID.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<FileItem>>;

    /// Files in a folder ordered by type (untyped last), then name.
    async fn find_by_folder(&self, folder_id: i64) -> AppResult<Vec<FileItem>>;

    /// Insert a file; a duplicate path yields a conflict error.
    async fn create(&self, data: &NewFileItem) -> AppResult<FileItem>;

    /// Insert a file unless its path already exists. Returns `None` when
    /// the row was skipped.
    async fn create_if_absent(&self, data: &NewFileItem) -> AppResult<Option<FileItem>>;
}
