//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata for a file in the hierarchy. Contents are not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FileItem {
    /// Store-assigned identifier.
    pub id: i64,
    /// Sanitized file name including extension.
    pub name: String,
    /// The folder containing this file.
    pub folder_id: i64,
    /// Short type label such as `pdf`, or `None` when untyped.
    pub file_type: Option<String>,
    /// File size in bytes.
    pub file_size: i64,
    /// Full materialized path (`folder.path + "/" + name`).
    pub path: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a file row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFileItem {
    /// Sanitized file name.
    pub name: String,
    /// Owning folder.
    pub folder_id: i64,
    /// Resolved type label.
    pub file_type: Option<String>,
    /// Normalized size in bytes.
    pub file_size: i64,
    /// Derived materialized path.
    pub path: String,
}
