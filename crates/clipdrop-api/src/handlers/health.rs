//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const READINESS_TIMEOUT: Duration = Duration::from_secs(5);
/// Key probed on the storage backend; it does not need to exist.
const READINESS_PROBE_KEY: &str = ".clipdrop-readiness-probe";

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub storage: String,
    pub storage_backend: String,
    pub recent_videos: usize,
}

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - storage backend is reachable.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let storage = match tokio::time::timeout(
        READINESS_TIMEOUT,
        state.storage.exists(READINESS_PROBE_KEY),
    )
    .await
    {
        Ok(Ok(_)) => "ready".to_string(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Storage readiness check failed");
            format!("not_ready: {}", e)
        }
        Err(_) => {
            tracing::error!("Storage readiness check timed out");
            "timeout".to_string()
        }
    };

    let ready = storage == "ready";
    let body = ReadinessResponse {
        status: if ready { "ready" } else { "not_ready" },
        storage,
        storage_backend: state.storage.backend_type().to_string(),
        recent_videos: state.history.len(),
    };
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body))
}
