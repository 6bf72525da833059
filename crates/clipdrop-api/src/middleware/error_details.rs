use crate::error::DetailedError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Error details middleware
///
/// Error responses are rendered without details. Outside production the
/// detailed body attached by `HttpAppError` replaces it; in production the
/// extension is dropped unused.
pub async fn error_details_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(DetailedError(detailed)) = response.extensions_mut().remove::<DetailedError>() else {
        return response;
    };

    if state.config.is_production() {
        return response;
    }

    match serde_json::to_vec(&detailed) {
        Ok(bytes) => {
            response.headers_mut().remove(header::CONTENT_LENGTH);
            *response.body_mut() = Body::from(bytes);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize detailed error body");
        }
    }

    response
}
