//! Clipdrop Storage Library
//!
//! This crate provides the `Storage` trait and its S3 and local filesystem
//! implementations.
//!
//! # Storage key format
//!
//! Every upload gets a fresh key `{uuid}{.ext}` where `.ext` is the lowercased
//! extension of the client's filename (omitted when it has none). Keys are
//! flat: the bucket or base directory root holds every object. Key generation
//! lives in the `keys` module so all backends agree.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use clipdrop_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
