use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use clipdrop_core::AppError;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentFilesResponse {
    /// URLs of the most recent uploads, newest first
    pub recent_files: Vec<String>,
}

/// List recently uploaded videos.
#[utoipa::path(
    get,
    path = "/recent",
    tag = "video",
    responses(
        (status = 200, description = "Recently uploaded video URLs, newest first", body = RecentFilesResponse)
    )
)]
pub async fn list_recent(State(state): State<Arc<AppState>>) -> Json<RecentFilesResponse> {
    Json(RecentFilesResponse {
        recent_files: state.history.recent(),
    })
}

/// Redirect to the most recently uploaded video.
#[utoipa::path(
    get,
    path = "/video/latest",
    tag = "video",
    responses(
        (status = 302, description = "Redirect to the latest video URL"),
        (status = 404, description = "No videos available", body = ErrorResponse)
    )
)]
pub async fn latest_video(State(state): State<Arc<AppState>>) -> Result<Response, HttpAppError> {
    let latest = state
        .history
        .latest()
        .ok_or_else(|| AppError::NotFound("No videos available".to_string()))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, latest)]).into_response())
}
