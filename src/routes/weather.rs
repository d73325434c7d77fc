use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{LocationQuery, WeatherInfo},
    routes::{AppJson, AppState},
    services::weather,
};

/// Handler for the weather lookup endpoint
pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    AppJson(query): AppJson<LocationQuery>,
) -> AppResult<Json<WeatherInfo>> {
    let info = weather::resolve(&state.weather, &query)?;

    tracing::info!(
        request_id = %request_id,
        location = %info.location,
        temperature = info.temperature,
        season = %info.season,
        "Weather resolved"
    );

    Ok(Json(info))
}
