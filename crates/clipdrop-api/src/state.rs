//! Application state and sub-state extractors.

use clipdrop_core::{Config, UploadHistory};
use clipdrop_storage::Storage;
use std::sync::Arc;

/// Limits applied to incoming uploads.
#[derive(Clone, Debug)]
pub struct UploadLimits {
    pub max_file_size: usize,
    pub allowed_extensions: Vec<String>,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_size: config.max_video_size_bytes,
            allowed_extensions: config.video_allowed_extensions.clone(),
        }
    }
}

/// Main application state: everything handlers need, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    /// Recently uploaded video URLs, newest first
    pub history: Arc<dyn UploadHistory>,
    pub upload_limits: UploadLimits,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>, history: Arc<dyn UploadHistory>) -> Self {
        let upload_limits = UploadLimits::from_config(&config);
        Self {
            config,
            storage,
            history,
            upload_limits,
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
