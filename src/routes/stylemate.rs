use axum::{extract::State, Extension, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{MixAndMatchRequest, MixAndMatchResponse},
    routes::{AppJson, AppState},
    services::stylemate,
};

/// Handler for mix & match recommendations from the model backend
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    AppJson(request): AppJson<MixAndMatchRequest>,
) -> AppResult<Json<MixAndMatchResponse>> {
    tracing::info!(request_id = %request_id, "Processing mix & match request");

    let response = stylemate::mix_and_match(state.backend.clone(), request).await?;

    tracing::info!(request_id = %request_id, "Mix & match completed");

    Ok(Json(response))
}

/// Handler for backend dataset statistics
pub async fn stats(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    Ok(Json(stylemate::stats(state.backend.clone()).await?))
}

/// Handler for backend health
pub async fn health(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    Ok(Json(stylemate::health(state.backend.clone()).await?))
}
