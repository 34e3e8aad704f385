//! Folder tree node for hierarchical display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Folder;

/// A folder together with its ordered child nodes.
///
/// Serializes to the folder DTO: the row fields followed by `children`.
/// Single-folder and subfolder reads use a node whose `children` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Parent folder ID.
    pub parent_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Child folder nodes, in the order they were attached.
    #[serde(default)]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

// Flattens the subtree before dropping so deep chains do not recurse.
impl Drop for FolderNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl From<Folder> for FolderNode {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            path: folder.path,
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
            children: Vec::new(),
        }
    }
}
