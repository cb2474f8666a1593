//! Veriflow API /v1: REST endpoints
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use veriflow_registry::TemplateRegistry;

use metrics::ApiMetrics;

/// Shared state behind the handlers.
pub struct AppState {
    pub registry: TemplateRegistry,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// State seeded with the sample template and fresh counters
    pub fn new() -> Self {
        Self {
            registry: TemplateRegistry::with_samples(),
            metrics: ApiMetrics::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/verify", post(handlers::verify))
        .route("/v1/registry/templates", get(handlers::list_templates))
        .route("/v1/health", get(handlers::health))
        .route("/v1/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str) {
    let state = Arc::new(AppState::new());
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Veriflow API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
