//! Clipdrop Core Library
//!
//! This crate provides the configuration, error types, and the in-memory
//! upload history shared by the storage and API crates.

pub mod config;
pub mod error;
pub mod history;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, Environment, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use history::{HistoryError, RecencyCache, UploadHistory};
pub use storage_types::StorageBackend;
