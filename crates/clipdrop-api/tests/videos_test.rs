//! Video upload and recent-uploads integration tests.
//!
//! Run with: `cargo test -p clipdrop-api --test videos_test`

mod helpers;

use axum::http::{header, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use helpers::storage::FailingStorage;
use helpers::{
    build_app, recent_files, setup_test_app, setup_test_app_with, test_config, upload_video,
    video_form,
};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_recent_is_empty_array_initially() {
    let app = setup_test_app(5).await;
    let response = app.client().get("/recent").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "recent_files": [] }));
}

#[tokio::test]
async fn test_latest_without_uploads_is_not_found() {
    let app = setup_test_app(5).await;
    let response = app.client().get("/video/latest").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No videos available");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_upload_then_recent_and_latest() {
    let app = setup_test_app(5).await;
    let client = app.client();

    let url = upload_video(client, "holiday.MP4", b"not really a video").await;
    assert!(url.starts_with(helpers::BASE_URL));
    assert!(url.ends_with(".mp4"));

    let key = url.rsplit('/').next().unwrap();
    let stored = std::fs::read(app.temp_dir.path().join(key)).unwrap();
    assert_eq!(stored, b"not really a video");

    assert_eq!(recent_files(client).await, vec![url.clone()]);

    let response = client.get("/video/latest").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        url
    );
}

#[tokio::test]
async fn test_recent_is_newest_first_and_bounded() {
    let app = setup_test_app(3).await;
    let client = app.client();

    let mut urls = Vec::new();
    for name in ["a.mp4", "b.mov", "c.webm", "d.mkv"] {
        urls.push(upload_video(client, name, name.as_bytes()).await);
    }

    let recent = recent_files(client).await;
    assert_eq!(recent, vec![urls[3].clone(), urls[2].clone(), urls[1].clone()]);
    assert_eq!(app.history.len(), 3);
    assert_eq!(app.history.latest(), Some(urls[3].clone()));
}

#[tokio::test]
async fn test_missing_video_field_is_bad_request() {
    let app = setup_test_app(5).await;
    let part = Part::bytes(b"data".to_vec()).file_name("clip.mp4");
    let form = MultipartForm::new().add_part("file", part);

    let response = app.client().post("/upload/video").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid file");
    assert!(app.history.is_empty());
}

#[tokio::test]
async fn test_disallowed_extension_is_rejected() {
    let app = setup_test_app(5).await;

    let response = app
        .client()
        .post("/upload/video")
        .multipart(video_form("notes.txt", b"hello"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.history.is_empty());
}

#[tokio::test]
async fn test_empty_file_is_rejected() {
    let app = setup_test_app(5).await;

    let response = app
        .client()
        .post("/upload/video")
        .multipart(video_form("empty.mp4", b""))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.history.is_empty());
}

#[tokio::test]
async fn test_oversized_file_is_rejected() {
    let app = setup_test_app(5).await;
    // MAX_VIDEO_SIZE_MB is 1 in the test config.
    let data = vec![0u8; 1024 * 1024 + 1];

    let response = app
        .client()
        .post("/upload/video")
        .multipart(video_form("big.mp4", &data))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.history.is_empty());
}

#[tokio::test]
async fn test_body_over_transport_limit_is_rejected() {
    let app = setup_test_app(5).await;
    // Past MAX_VIDEO_SIZE_MB (1) plus the multipart overhead allowance (1 MiB).
    let data = vec![0u8; 2 * 1024 * 1024 + 1];

    let response = app
        .client()
        .post("/upload/video")
        .multipart(video_form("huge.mp4", &data))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.history.is_empty());
    assert_eq!(std::fs::read_dir(app.temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_error_details_shown_outside_production() {
    let app = setup_test_app(5).await;

    let response = app
        .client()
        .post("/upload/video")
        .multipart(video_form("notes.txt", b"hello"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["details"].as_str().unwrap().contains("Invalid file extension"));
    assert_eq!(body["error_type"], "InvalidInput");
}

#[tokio::test]
async fn test_error_details_hidden_in_production_config() {
    let app = setup_test_app_with(&[
        ("ENVIRONMENT", "production"),
        ("CORS_ORIGINS", "https://example.com"),
    ])
    .await;

    let response = app
        .client()
        .post("/upload/video")
        .multipart(video_form("notes.txt", b"hello"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body.get("details").is_none());
    assert!(body.get("error_type").is_none());

    let response = app.client().get("/video/latest").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No videos available");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_storage_failure_leaves_history_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, &[]);
    let storage = Arc::new(FailingStorage::default());
    let app = build_app(config, storage.clone(), temp_dir);

    let response = app
        .client()
        .post("/upload/video")
        .multipart(video_form("clip.mp4", b"bytes"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Failed to upload video");
    assert_eq!(body["code"], "STORAGE_ERROR");
    assert!(body.get("details").is_none());
    assert_eq!(storage.attempts(), 1);

    assert!(recent_files(app.client()).await.is_empty());
    assert_eq!(
        app.client().get("/video/latest").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_failed_upload_after_success_keeps_previous_latest() {
    let app = setup_test_app(5).await;
    let client = app.client();

    let url = upload_video(client, "first.mp4", b"one").await;
    let response = client
        .post("/upload/video")
        .multipart(video_form("second.exe", b"two"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    assert_eq!(recent_files(client).await, vec![url]);
}
