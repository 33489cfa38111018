//! Server setup and initialization
//!
//! Provides the application builder and server runner. Durable state lives
//! in the external document store; the in-process store adapter backs
//! local runs and tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use herald_common::{AppConfig, AppError};
use herald_push::HttpPushGateway;
use herald_service::ServiceContext;
use herald_store::MemoryStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> AppState {
    let store = Arc::new(MemoryStore::new());

    let gateway = Arc::new(HttpPushGateway::new(
        config.push.endpoint.clone(),
        config.push.api_key.clone(),
        Duration::from_secs(config.push.timeout_secs),
    ));
    info!(endpoint = %config.push.endpoint, "Push gateway configured");

    let service_context = ServiceContext::from_store(store, gateway, config.clone());

    AppState::new(service_context, config)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    let state = create_app_state(config);
    let app = create_app(state);

    run_server(app, addr).await
}
