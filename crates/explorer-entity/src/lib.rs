//! # explorer-entity
//!
//! Entity models for the folder explorer. `Folder` and `FileItem` mirror the
//! `folders` and `files` table rows and derive `sqlx::FromRow`; `FolderNode`
//! is the read-side tree shape assembled from folder rows.

pub mod file;
pub mod folder;

pub use file::{FileItem, NewFileItem};
pub use folder::{Folder, FolderNode, NewFolder};
