use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    routes::{AppJson, AppState},
    services::model::{ModelInfo, Prediction},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStatusResponse {
    pub success: bool,
    pub model_info: ModelInfo,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub success: bool,
    pub predictions: Prediction,
    pub model_info: ModelInfo,
}

/// Reports the style model's metadata
pub async fn status(State(state): State<Arc<AppState>>) -> Json<ModelStatusResponse> {
    Json(ModelStatusResponse {
        success: true,
        model_info: state.model.info().clone(),
        status: "Model is ready",
    })
}

/// Runs the style model on arbitrary user features
pub async fn predict(
    State(state): State<Arc<AppState>>,
    AppJson(features): AppJson<Value>,
) -> Json<PredictionResponse> {
    Json(PredictionResponse {
        success: true,
        predictions: state.model.predict(&features),
        model_info: state.model.info().clone(),
    })
}
