use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    middleware::request_id::RequestId,
    models::{RecommendationResponse, UserPreference},
    routes::{AppJson, AppState},
    services::recommendations,
};

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    AppJson(preferences): AppJson<UserPreference>,
) -> Json<RecommendationResponse> {
    tracing::info!(
        request_id = %request_id,
        occasion = preferences.occasion().unwrap_or("-"),
        body_type = preferences.body_type().unwrap_or("-"),
        budget = preferences.budget().unwrap_or("-"),
        "Processing recommendation request"
    );

    let results = recommendations::recommend(&state.catalog, &preferences, &state.weights);

    tracing::info!(
        request_id = %request_id,
        count = results.len(),
        top_confidence = results.first().map_or(0.0, |r| r.confidence),
        "Recommendations ranked"
    );

    Json(RecommendationResponse::new(results))
}
