//! Tracing subscriber setup.

use clipdrop_core::{Config, LogFormat};
use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

fn default_directives(config: &Config) -> &'static str {
    if config.is_production() {
        "clipdrop_api=info,clipdrop_storage=info,clipdrop_core=info,tower_http=info"
    } else {
        "clipdrop_api=debug,clipdrop_storage=debug,clipdrop_core=debug,tower_http=debug"
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &Config) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let (compact, json) = match config.log_format {
        LogFormat::Compact => (
            Some(
                tracing_subscriber::fmt::layer().event_format(
                    Format::default()
                        .compact()
                        .with_target(false)
                        .without_time(),
                ),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::info!(
        environment = config.environment.as_str(),
        log_format = ?config.log_format,
        "Tracing initialized"
    );
    Ok(())
}
