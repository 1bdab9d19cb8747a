use axum::routing::any;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::errors::ApiError;
use super::generate_image::api_handler;
use crate::config::GatewayConfig;
use crate::diffusion::{HttpImageBackend, ImageBackend, ModelProfile};

/// Shared request context: the backend handle and the model profile
/// selected at startup. Both are immutable for the lifetime of the
/// server, so requests never contend on state.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ImageBackend>,
    pub profile: ModelProfile,
}

impl AppState {
    pub fn new(backend: Arc<dyn ImageBackend>, profile: ModelProfile) -> Self {
        Self { backend, profile }
    }
}

/// Build the gateway router. `/api` is the only routed path; everything
/// else falls through to a 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", any(api_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

pub async fn start_server(config: GatewayConfig) -> anyhow::Result<()> {
    let backend = HttpImageBackend::new(
        &config.backend_endpoint,
        config.backend_api_token.clone(),
        config.backend_timeout,
    )?;
    let state = AppState::new(Arc::new(backend), config.profile.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Image gateway listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
