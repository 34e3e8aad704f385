//! File repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_entity::file::{FileItem, NewFileItem};

use super::map_insert_error;
use crate::store::FileStore;

const COLUMNS: &str = "id, name, folder_id, file_type, file_size, path, created_at, updated_at";

/// PostgreSQL-backed file store.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<FileItem>> {
        sqlx::query_as::<_, FileItem>(&format!("SELECT {COLUMNS} FROM files WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_by_folder(&self, folder_id: i64) -> AppResult<Vec<FileItem>> {
        sqlx::query_as::<_, FileItem>(&format!(
            "SELECT {COLUMNS} FROM files WHERE folder_id = $1 \
             ORDER BY file_type ASC NULLS LAST, name ASC, id ASC"
        ))
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn create(&self, data: &NewFileItem) -> AppResult<FileItem> {
        sqlx::query_as::<_, FileItem>(&format!(
            "INSERT INTO files (name, folder_id, file_type, file_size, path) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.folder_id)
        .bind(&data.file_type)
        .bind(data.file_size)
        .bind(&data.path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &data.path, "Failed to create file"))
    }

    async fn create_if_absent(&self, data: &NewFileItem) -> AppResult<Option<FileItem>> {
        sqlx::query_as::<_, FileItem>(&format!(
            "INSERT INTO files (name, folder_id, file_type, file_size, path) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT (path) DO NOTHING RETURNING {COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.folder_id)
        .bind(&data.file_type)
        .bind(data.file_size)
        .bind(&data.path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert file", e))
    }
}
