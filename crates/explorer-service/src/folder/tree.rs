//! Folder tree assembly.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use explorer_core::result::AppResult;
use explorer_database::store::FolderStore;
use explorer_entity::folder::{Folder, FolderNode};

/// Assemble flat folder rows into a forest of root nodes.
///
/// Runs in O(n) without recursion, so nesting depth is bounded only by
/// memory. Children keep the relative order in which they appear in
/// `rows`. A row whose `parent_id` is not among `rows` is left out, and so
/// is everything beneath it; rows caught in a parent cycle are never
/// reached from a root and are left out as well.
pub fn build_forest(rows: Vec<Folder>) -> Vec<FolderNode> {
    assemble(rows).0
}

/// [`build_forest`] plus the number of rows that made it into the forest.
fn assemble(rows: Vec<Folder>) -> (Vec<FolderNode>, usize) {
    let index: HashMap<i64, usize> = rows
        .iter()
        .enumerate()
        .map(|(pos, folder)| (folder.id, pos))
        .collect();

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); rows.len()];
    for (pos, folder) in rows.iter().enumerate() {
        match folder.parent_id {
            None => roots.push(pos),
            Some(parent_id) => {
                if let Some(&parent_pos) = index.get(&parent_id) {
                    children[parent_pos].push(pos);
                }
            }
        }
    }

    // Every parent precedes its descendants in `reached`.
    let mut reached = Vec::with_capacity(rows.len());
    let mut pending = roots.clone();
    while let Some(pos) = pending.pop() {
        reached.push(pos);
        pending.extend_from_slice(&children[pos]);
    }

    let mut slots: Vec<Option<Folder>> = rows.into_iter().map(Some).collect();
    let mut built: Vec<Option<FolderNode>> = std::iter::repeat_with(|| None)
        .take(slots.len())
        .collect();

    // Walk backwards so each node's children are finished before it.
    for &pos in reached.iter().rev() {
        let Some(folder) = slots[pos].take() else {
            continue;
        };
        let mut node = FolderNode::from(folder);
        node.children = children[pos]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[pos] = Some(node);
    }

    let forest = roots
        .into_iter()
        .filter_map(|pos| built[pos].take())
        .collect();
    (forest, reached.len())
}

/// Builds the full folder tree from the store.
#[derive(Debug, Clone)]
pub struct TreeService {
    folder_store: Arc<dyn FolderStore>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folder_store: Arc<dyn FolderStore>) -> Self {
        Self { folder_store }
    }

    /// Every folder, arranged as roots with nested children, names ascending
    /// at every level.
    pub async fn get_tree(&self) -> AppResult<Vec<FolderNode>> {
        let rows = self.folder_store.find_all().await?;
        let total = rows.len();
        let (forest, attached) = assemble(rows);

        if attached < total {
            debug!(
                total,
                attached,
                "Folder rows without a reachable parent were left out of the tree"
            );
        }

        Ok(forest)
    }
}
