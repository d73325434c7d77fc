use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

pub mod extract;
pub mod model;
pub mod recommendations;
pub mod state;
pub mod stylemate;
pub mod weather;

pub use extract::AppJson;
pub use state::AppState;

/// Creates the application router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations", post(recommendations::recommend))
        .route("/model", get(model::status).post(model::predict))
        .route("/stylemate/weather", post(weather::resolve))
        .route("/stylemate/recommend", post(stylemate::recommend))
        .route("/stylemate/stats", get(stylemate::stats))
        .route("/stylemate/health", get(stylemate::health))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
