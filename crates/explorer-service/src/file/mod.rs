//! File metadata services.

pub mod service;

pub use service::{CreateFileRequest, FileService};
