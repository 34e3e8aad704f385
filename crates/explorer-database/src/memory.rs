//! Process-local store implementing the same contract as the PostgreSQL
//! repositories.
//!
//! Rows live behind a single [`RwLock`]; each insert checks path uniqueness
//! and writes under the same write guard, so the conflict check is atomic.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_entity::{FileItem, Folder, NewFileItem, NewFolder};

use crate::store::{FileStore, FolderStore};

#[derive(Debug, Default)]
struct Tables {
    folders: BTreeMap<i64, Folder>,
    folder_paths: HashMap<String, i64>,
    files: BTreeMap<i64, FileItem>,
    file_paths: HashMap<String, i64>,
    next_folder_id: i64,
    next_file_id: i64,
}

impl Tables {
    fn insert_folder(&mut self, data: &NewFolder) -> AppResult<Folder> {
        if self.folder_paths.contains_key(&data.path) {
            return Err(AppError::conflict(format!(
                "Path '{}' already exists",
                data.path
            )));
        }
        if let Some(parent_id) = data.parent_id {
            if !self.folders.contains_key(&parent_id) {
                return Err(AppError::database(format!(
                    "Parent folder {parent_id} does not exist"
                )));
            }
        }

        self.next_folder_id += 1;
        let now = Utc::now();
        let folder = Folder {
            id: self.next_folder_id,
            name: data.name.clone(),
            path: data.path.clone(),
            parent_id: data.parent_id,
            created_at: now,
            updated_at: now,
        };
        self.folder_paths.insert(folder.path.clone(), folder.id);
        self.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    fn insert_file(&mut self, data: &NewFileItem) -> AppResult<FileItem> {
        if self.file_paths.contains_key(&data.path) {
            return Err(AppError::conflict(format!(
                "Path '{}' already exists",
                data.path
            )));
        }
        if !self.folders.contains_key(&data.folder_id) {
            return Err(AppError::database(format!(
                "Folder {} does not exist",
                data.folder_id
            )));
        }

        self.next_file_id += 1;
        let now = Utc::now();
        let file = FileItem {
            id: self.next_file_id,
            name: data.name.clone(),
            folder_id: data.folder_id,
            file_type: data.file_type.clone(),
            file_size: data.file_size,
            path: data.path.clone(),
            created_at: now,
            updated_at: now,
        };
        self.file_paths.insert(file.path.clone(), file.id);
        self.files.insert(file.id, file.clone());
        Ok(file)
    }
}

/// In-memory folder and file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Byte-wise, like the `COLLATE "C"` columns.
fn by_name(a: &Folder, b: &Folder) -> Ordering {
    a.name.cmp(&b.name).then(a.id.cmp(&b.id))
}

/// Type ascending with untyped files last, then name.
fn by_type_then_name(a: &FileItem, b: &FileItem) -> Ordering {
    let by_type = match (&a.file_type, &b.file_type) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_type.then_with(|| a.name.cmp(&b.name)).then(a.id.cmp(&b.id))
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        Ok(self.tables.read().await.folders.get(&id).cloned())
    }

    async fn find_by_path(&self, path: &str) -> AppResult<Option<Folder>> {
        let tables = self.tables.read().await;
        Ok(tables
            .folder_paths
            .get(path)
            .and_then(|id| tables.folders.get(id))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        let mut folders: Vec<Folder> = self.tables.read().await.folders.values().cloned().collect();
        folders.sort_by(by_name);
        Ok(folders)
    }

    async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Folder>> {
        let mut folders: Vec<Folder> = self
            .tables
            .read()
            .await
            .folders
            .values()
            .filter(|f| f.parent_id == Some(parent_id))
            .cloned()
            .collect();
        folders.sort_by(by_name);
        Ok(folders)
    }

    async fn create(&self, data: &NewFolder) -> AppResult<Folder> {
        self.tables.write().await.insert_folder(data)
    }

    async fn upsert_by_path(&self, data: &NewFolder) -> AppResult<Folder> {
        let mut tables = self.tables.write().await;
        if let Some(id) = tables.folder_paths.get(&data.path).copied() {
            if let Some(folder) = tables.folders.get_mut(&id) {
                folder.name = data.name.clone();
                folder.parent_id = data.parent_id;
                folder.updated_at = Utc::now();
                return Ok(folder.clone());
            }
        }
        tables.insert_folder(data)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<FileItem>> {
        Ok(self.tables.read().await.files.get(&id).cloned())
    }

    async fn find_by_folder(&self, folder_id: i64) -> AppResult<Vec<FileItem>> {
        let mut files: Vec<FileItem> = self
            .tables
            .read()
            .await
            .files
            .values()
            .filter(|f| f.folder_id == folder_id)
            .cloned()
            .collect();
        files.sort_by(by_type_then_name);
        Ok(files)
    }

    async fn create(&self, data: &NewFileItem) -> AppResult<FileItem> {
        self.tables.write().await.insert_file(data)
    }

    async fn create_if_absent(&self, data: &NewFileItem) -> AppResult<Option<FileItem>> {
        let mut tables = self.tables.write().await;
        if tables.file_paths.contains_key(&data.path) {
            return Ok(None);
        }
        tables.insert_file(data).map(Some)
    }
}
