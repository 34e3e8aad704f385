//! # explorer-database
//!
//! The relational store behind the hierarchy: the [`FolderStore`] and
//! [`FileStore`] collaborator traits, their PostgreSQL implementations, and
//! a process-local [`MemoryStore`].

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use repositories::{FileRepository, FolderRepository};
pub use store::{FileStore, FolderStore};
