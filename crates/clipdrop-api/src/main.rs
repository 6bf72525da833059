use clipdrop_core::Config;

// Use mimalloc as the global allocator for lower fragmentation under
// large, short-lived upload buffers, especially on musl-based containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, storage, history, routes)
    let (_state, router) = clipdrop_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    clipdrop_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
