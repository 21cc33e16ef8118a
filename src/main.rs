//! Coffee Machine - An HTTP-controlled coffee machine simulator
//!
//! This is the main entry point for the coffee-machine application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use coffee_machine::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::resource_monitor_task,
    utils::shutdown_signal,
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("coffee_machine={},tower_http=info", config.log_level()))
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(usize::from(config.threads))
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Starting coffee-machine server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, threads={}",
          config.host, config.port, config.threads);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the resource monitor background task
    let monitor_state = Arc::clone(&state);
    tokio::spawn(async move {
        resource_monitor_task(monitor_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /auth             - Check the machine is online");
    info!("  POST /coffee           - Brew a coffee");
    info!("  POST /recipes/custom   - Register the custom recipe");
    info!("  GET  /clean            - Check the clean level");
    info!("  POST /clean            - Clean the machine");
    info!("  GET  /resources        - Check milk, water and beans");
    info!("  POST /resources/refill - Refill one container");
    info!("  GET  /status           - Full machine status");
    info!("  GET  /health           - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
