//! Configuration validation
//!
//! Hard errors come from `Config::validate`; this adds startup warnings for
//! settings that are legal but probably unintended.

use anyhow::Result;
use clipdrop_core::{Config, StorageBackend};

/// Largest object accepted by a single S3 PUT.
const S3_SINGLE_PUT_LIMIT_BYTES: usize = 5 * 1024 * 1024 * 1024;

pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.is_production() && config.storage_backend == StorageBackend::Local {
        tracing::warn!("Local storage backend in production - uploads are not replicated");
    }

    if config.storage_backend == StorageBackend::S3
        && config.max_video_size_bytes > S3_SINGLE_PUT_LIMIT_BYTES
    {
        tracing::warn!(
            max_video_size_bytes = config.max_video_size_bytes,
            "MAX_VIDEO_SIZE_MB exceeds the S3 single upload limit (5 GB)"
        );
    }

    if config.http.upload_timeout < config.http.timeout {
        tracing::warn!(
            upload_timeout_secs = config.http.upload_timeout.as_secs(),
            timeout_secs = config.http.timeout.as_secs(),
            "UPLOAD_TIMEOUT_SECS is shorter than HTTP_TIMEOUT_SECS"
        );
    }

    if config.video_allowed_extensions.is_empty() {
        tracing::warn!("VIDEO_ALLOWED_EXTENSIONS is empty - any file extension will be accepted");
    }

    Ok(())
}
