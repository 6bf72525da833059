//! Route configuration and setup.

use crate::constants::{
    DOCS_PATH, HEALTH_PATH, LATEST_VIDEO_PATH, MULTIPART_OVERHEAD_BYTES, OPENAPI_JSON_PATH,
    READY_PATH, RECENT_PATH, UPLOAD_VIDEO_PATH,
};
use crate::handlers::{health, recent, video_upload};
use crate::middleware::{error_details_middleware, request_id_middleware, RequestId};
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use clipdrop_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    // Uploads stream large bodies, so they get their own timeout and body limit.
    let upload_routes = Router::new()
        .route(UPLOAD_VIDEO_PATH, post(video_upload::upload_video))
        .layer(RequestBodyLimitLayer::new(
            config
                .max_video_size_bytes
                .saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(TimeoutLayer::new(config.http.upload_timeout));

    let api_routes = Router::new()
        .route(RECENT_PATH, get(recent::list_recent))
        .route(LATEST_VIDEO_PATH, get(recent::latest_video))
        .route(HEALTH_PATH, get(health::liveness_check))
        .route(READY_PATH, get(health::readiness_check))
        .route(
            OPENAPI_JSON_PATH,
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .layer(TimeoutLayer::new(config.http.timeout));

    tracing::info!(
        timeout_secs = config.http.timeout.as_secs(),
        upload_timeout_secs = config.http.upload_timeout.as_secs(),
        "Request timeout layers enabled"
    );

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.as_str())
            .unwrap_or("-");
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    let app = upload_routes
        .merge(api_routes)
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_JSON_PATH).path(DOCS_PATH))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            error_details_middleware,
        ))
        .layer(cors)
        .layer(trace_layer)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let cors = if config.http.cors_origins.iter().any(|o| o == "*") {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .http
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
