//! PostgreSQL repository implementations.

pub mod file;
pub mod folder;

pub use file::FileRepository;
pub use folder::FolderRepository;

use explorer_core::error::{AppError, ErrorKind};

/// Map a sqlx error, turning unique-constraint violations into
/// [`ErrorKind::Conflict`] and everything else into a database error.
pub(crate) fn map_insert_error(err: sqlx::Error, path: &str, context: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::conflict(format!("Path '{path}' already exists"))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}
