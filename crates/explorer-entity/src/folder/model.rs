//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name; never contains `/` or `\`.
    pub name: String,
    /// Full materialized path (e.g. `/Documents/Invoices`).
    pub path: String,
    /// Parent folder ID (`None` for roots).
    pub parent_id: Option<i64>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to insert or upsert a folder row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFolder {
    /// Sanitized folder name.
    pub name: String,
    /// Derived materialized path.
    pub path: String,
    /// Parent folder (`None` for root).
    pub parent_id: Option<i64>,
}
