//! # explorer-service
//!
//! The hierarchy service: name sanitization, path derivation, file type and
//! size rules, and tree assembly over the store collaborator.
//!
//! Services follow constructor injection. Store handles are passed in as
//! `Arc<dyn FolderStore>` / `Arc<dyn FileStore>` and the services keep no
//! other state, so a single instance is shared by every request handler.

pub mod file;
pub mod folder;
pub mod naming;
pub mod seed;

pub use file::{CreateFileRequest, FileService};
pub use folder::{CreateFolderRequest, FolderService, TreeService};
pub use seed::{SeedReport, SeedService};
