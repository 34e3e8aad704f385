//! Idempotent sample data.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_database::store::{FileStore, FolderStore};
use explorer_entity::{NewFileItem, NewFolder};

use crate::naming;

/// Sample folders as `(name, parent path)`, parents listed first.
const SAMPLE_FOLDERS: &[(&str, Option<&str>)] = &[
    ("Documents", None),
    ("Pictures", None),
    ("Music", None),
    ("Work", None),
    ("Invoices", Some("/Documents")),
    ("Transport", Some("/Documents/Invoices")),
    ("Family", Some("/Pictures")),
    ("Vacations", Some("/Pictures")),
];

/// Sample files as `(name, type, size, folder path)`.
const SAMPLE_FILES: &[(&str, &str, i64, &str)] = &[
    ("cv.pdf", "pdf", 256_000, "/Documents"),
    ("logo.png", "png", 128_000, "/Pictures"),
    ("wireframe.svg", "svg", 64_000, "/Pictures"),
    ("song.mp3", "mp3", 3_145_728, "/Music"),
    ("family-dinner.jpg", "jpg", 1_536_000, "/Pictures/Family"),
    ("project-notes.txt", "txt", 8_192, "/Work"),
];

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Folders inserted or refreshed by path.
    pub folders_upserted: usize,
    /// Files newly inserted.
    pub files_created: usize,
    /// Files whose path already existed.
    pub files_skipped: usize,
}

/// Loads the sample hierarchy.
#[derive(Debug, Clone)]
pub struct SeedService {
    folder_store: Arc<dyn FolderStore>,
    file_store: Arc<dyn FileStore>,
}

impl SeedService {
    /// Creates a new seed service.
    pub fn new(folder_store: Arc<dyn FolderStore>, file_store: Arc<dyn FileStore>) -> Self {
        Self {
            folder_store,
            file_store,
        }
    }

    /// Upsert the sample folders and insert the sample files that are not
    /// already present. Safe to run repeatedly.
    pub async fn seed_sample_hierarchy(&self) -> AppResult<SeedReport> {
        let mut report = SeedReport::default();

        for &(name, parent_path) in SAMPLE_FOLDERS {
            let parent = match parent_path {
                Some(p) => Some(self.folder_by_path(p).await?),
                None => None,
            };
            let record = NewFolder {
                name: name.to_string(),
                path: naming::child_path(parent.as_ref().map(|f| f.path.as_str()), name),
                parent_id: parent.map(|f| f.id),
            };
            self.folder_store.upsert_by_path(&record).await?;
            report.folders_upserted += 1;
        }

        for &(name, file_type, file_size, folder_path) in SAMPLE_FILES {
            let folder = self.folder_by_path(folder_path).await?;
            let record = NewFileItem {
                name: name.to_string(),
                folder_id: folder.id,
                file_type: Some(file_type.to_string()),
                file_size,
                path: naming::child_path(Some(&folder.path), name),
            };
            match self.file_store.create_if_absent(&record).await? {
                Some(_) => report.files_created += 1,
                None => report.files_skipped += 1,
            }
        }

        info!(
            folders = report.folders_upserted,
            files_created = report.files_created,
            files_skipped = report.files_skipped,
            "Sample hierarchy seeded"
        );
        Ok(report)
    }

    async fn folder_by_path(&self, path: &str) -> AppResult<explorer_entity::Folder> {
        self.folder_store
            .find_by_path(path)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Seed folder '{path}' not found")))
    }
}
