use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

pub mod analyzer;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod telemetry;

use analyzer::{ItemAnalyzer, PlaceholderAnalyzer};
use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn ItemAnalyzer>,
    pub openapi: Arc<utoipa::openapi::OpenApi>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_analyzer(config, Arc::new(PlaceholderAnalyzer))
    }

    pub fn with_analyzer(config: &Config, analyzer: Arc<dyn ItemAnalyzer>) -> Self {
        Self {
            analyzer,
            openapi: Arc::new(openapi::doc(&config.service_title)),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/categorize", post(handlers::items::categorize))
        .route("/prioritize", post(handlers::items::prioritize))
        .route("/embed", post(handlers::items::embed))
        .route("/openapi.json", get(handlers::docs::openapi_json))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::cors_layer()),
        )
        .with_state(state)
}
