//! Server setup and initialization
//!
//! Wires together logging, the project store and the HTTP routes.

use crate::{
    api::{create_project_routes, AppState},
    config::Config,
    project::{ProjectStore, SqliteProjectStore},
};
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// RUST_LOG wins over the configured filter. Calling twice is harmless.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .try_init()
    {
        // A subscriber is already installed; keep it
        tracing::debug!("Tracing subscriber already set: {}", e);
    }
}

/// Build the router around an already-constructed store
pub fn create_router(store: Arc<dyn ProjectStore>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Project listing API routes
        .merge(create_project_routes().with_state(AppState::new(store)))
}

/// Create the main Axum application with all routes
///
/// Opens the project database from configuration and hands it to the router.
pub async fn create_app(config: &Config) -> Result<Router> {
    tracing::info!("🏗️ Initializing project store");
    let store = SqliteProjectStore::connect(&config.database)
        .await
        .with_context(|| format!("Failed to open project database at {}", config.database.path))?;

    tracing::info!("📡 Creating HTTP router");
    let app = create_router(Arc::new(store));

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    init_tracing(&config);

    tracing::info!("Starting showcase server...");

    let app = create_app(&config).await?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
