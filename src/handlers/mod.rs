pub mod drafts;
pub mod error;
pub mod location;

use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::ReverseGeocoder;

pub use drafts::create_draft;
pub use error::ApiError;
pub use location::resolve_location;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<dyn ReverseGeocoder>,
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "civic-report",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/location/resolve", post(resolve_location))
        .route("/api/drafts", post(create_draft))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
