//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p clipdrop-api`.

#![allow(dead_code)]

pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use clipdrop_api::setup::routes;
use clipdrop_api::state::AppState;
use clipdrop_core::{Config, RecencyCache};
use clipdrop_storage::{LocalStorage, Storage};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

pub const BASE_URL: &str = "http://media.test/videos";

/// Test application: server plus the resources it owns.
pub struct TestApp {
    pub server: TestServer,
    pub history: Arc<RecencyCache>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Config for a local-storage app rooted at `dir`, with extra overrides.
pub fn test_config(dir: &TempDir, overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("ENVIRONMENT".to_string(), "test".to_string()),
        ("STORAGE_BACKEND".to_string(), "local".to_string()),
        (
            "LOCAL_STORAGE_PATH".to_string(),
            dir.path().to_string_lossy().into_owned(),
        ),
        ("LOCAL_STORAGE_BASE_URL".to_string(), BASE_URL.to_string()),
        ("MAX_VIDEO_SIZE_MB".to_string(), "1".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

/// App backed by local storage in a temp dir and a history of `capacity`.
pub async fn setup_test_app(capacity: usize) -> TestApp {
    let limit = capacity.to_string();
    setup_test_app_with(&[("RECENT_VIDEOS_LIMIT", limit.as_str())]).await
}

/// Local-storage app with config overrides.
pub async fn setup_test_app_with(overrides: &[(&str, &str)]) -> TestApp {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = test_config(&temp_dir, overrides);
    let storage = LocalStorage::new(temp_dir.path(), BASE_URL.to_string())
        .await
        .expect("local storage");
    build_app(config, Arc::new(storage), temp_dir)
}

/// App with a caller-provided storage backend.
pub fn build_app(config: Config, storage: Arc<dyn Storage>, temp_dir: TempDir) -> TestApp {
    let history = Arc::new(
        RecencyCache::with_capacity(config.recent_videos_limit).expect("non-zero capacity"),
    );
    let state = Arc::new(AppState::new(config.clone(), storage, history.clone()));
    let router = routes::setup_routes(&config, state).expect("routes");
    let server = TestServer::new(router.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        history,
        temp_dir,
    }
}

pub fn video_form(filename: &str, data: &[u8]) -> MultipartForm {
    let part = Part::bytes(data.to_vec())
        .file_name(filename.to_string())
        .mime_type("video/mp4");
    MultipartForm::new().add_part("video", part)
}

/// Upload `filename` and return the stored URL, asserting success.
pub async fn upload_video(client: &TestServer, filename: &str, data: &[u8]) -> String {
    let response = client
        .post("/upload/video")
        .multipart(video_form(filename, data))
        .await;
    assert_eq!(response.status_code(), 200, "upload failed: {}", response.text());
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    body["filename"]
        .as_str()
        .expect("Expected 'filename' in upload response")
        .to_string()
}

pub async fn recent_files(client: &TestServer) -> Vec<String> {
    let response: TestResponse = client.get("/recent").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    body["recent_files"]
        .as_array()
        .expect("recent_files must be an array")
        .iter()
        .map(|v| v.as_str().unwrap_or_default().to_string())
        .collect()
}
