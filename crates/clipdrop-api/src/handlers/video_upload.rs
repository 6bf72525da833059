use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{extract_video_file, validate_file_extension, validate_file_size};
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Always "success"
    pub status: String,
    /// Public URL of the stored video
    pub filename: String,
}

/// Upload a video to object storage and record its URL as the latest upload.
#[utoipa::path(
    post,
    path = "/upload/video",
    tag = "video",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Video file in the `video` field"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let limits = &state.upload_limits;

    let file = extract_video_file(multipart).await.map_err(|e| {
        tracing::warn!(error = %e, "Failed to get video file from form");
        HttpAppError::from(e)
    })?;

    validate_file_size(file.data.len(), limits.max_file_size)?;
    validate_file_extension(&file.filename, &limits.allowed_extensions)?;

    let size_bytes = file.data.len();
    let (storage_key, url) = state
        .storage
        .upload(&file.filename, &file.content_type, file.data)
        .await?;

    // Only successful uploads are recorded.
    state.history.add(url.clone());

    tracing::info!(
        storage_key = %storage_key,
        original_filename = %file.filename,
        content_type = %file.content_type,
        size_bytes,
        "Video uploaded"
    );

    Ok(Json(UploadResponse {
        status: "success".to_string(),
        filename: url,
    }))
}
