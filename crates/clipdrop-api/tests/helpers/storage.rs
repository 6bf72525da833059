//! Storage doubles.

use async_trait::async_trait;
use clipdrop_storage::{Storage, StorageBackend, StorageError, StorageResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Storage that rejects every operation, counting upload attempts.
#[derive(Default)]
pub struct FailingStorage {
    pub upload_attempts: AtomicUsize,
}

impl FailingStorage {
    pub fn attempts(&self) -> usize {
        self.upload_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Storage for FailingStorage {
    async fn upload(
        &self,
        _filename: &str,
        _content_type: &str,
        _data: Vec<u8>,
    ) -> StorageResult<(String, String)> {
        self.upload_attempts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::UploadFailed("bucket unavailable".to_string()))
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        Err(StorageError::NotFound(storage_key.to_string()))
    }

    async fn exists(&self, _storage_key: &str) -> StorageResult<bool> {
        Err(StorageError::BackendError("bucket unavailable".to_string()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
