//! Application setup and initialization
//!
//! Everything `main` needs to go from a loaded `Config` to a servable router.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use clipdrop_core::{Config, RecencyCache};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(&config)?;

    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let storage = storage::setup_storage(&config).await?;

    let history = RecencyCache::with_capacity(config.recent_videos_limit)
        .context("Invalid RECENT_VIDEOS_LIMIT")?;
    tracing::info!(
        capacity = history.capacity(),
        "Recent uploads history initialized"
    );

    let state = Arc::new(AppState::new(config.clone(), storage, Arc::new(history)));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
