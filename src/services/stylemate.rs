use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{MixAndMatchRequest, MixAndMatchResponse},
    services::providers::ModelBackend,
};

/// Validates a mix & match request and forwards it to the model backend
///
/// All four fields are required. The backend's `recommendations` payload is
/// returned as-is.
pub async fn mix_and_match(
    backend: Arc<dyn ModelBackend>,
    request: MixAndMatchRequest,
) -> AppResult<MixAndMatchResponse> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "All fields (location, gender, tema, warna) are required; missing: {}",
            missing.join(", ")
        )));
    }

    tracing::info!(
        location = %request.location,
        gender = %request.gender,
        theme = %request.theme,
        color = %request.color,
        backend = backend.name(),
        "Forwarding mix & match request"
    );

    let mut body = backend.recommend(&request).await?;
    let recommendations = body
        .get_mut("recommendations")
        .map(Value::take)
        .unwrap_or(Value::Null);

    Ok(MixAndMatchResponse {
        success: true,
        recommendations,
    })
}

/// Dataset statistics, passed through from the backend
pub async fn stats(backend: Arc<dyn ModelBackend>) -> AppResult<Value> {
    backend.stats().await
}

/// Backend health, passed through from the backend
pub async fn health(backend: Arc<dyn ModelBackend>) -> AppResult<Value> {
    backend.health().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockModelBackend;
    use serde_json::json;

    fn request() -> MixAndMatchRequest {
        MixAndMatchRequest {
            location: "Bandung".to_string(),
            gender: "Women".to_string(),
            theme: "casual".to_string(),
            color: "blue".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mix_and_match_unwraps_recommendations() {
        let mut backend = MockModelBackend::new();
        backend.expect_name().return_const("mock");
        backend
            .expect_recommend()
            .withf(|req| req.location == "Bandung" && req.color == "blue")
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "success": true,
                    "recommendations": { "Season": "Spring", "Atasan": [] }
                }))
            });

        let response = mix_and_match(Arc::new(backend), request()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.recommendations["Season"], "Spring");
    }

    #[tokio::test]
    async fn test_mix_and_match_rejects_missing_fields() {
        let mut backend = MockModelBackend::new();
        backend.expect_recommend().never();

        let mut incomplete = request();
        incomplete.color = String::new();

        let result = mix_and_match(Arc::new(backend), incomplete).await;
        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg.contains("warna")));
    }

    #[tokio::test]
    async fn test_mix_and_match_propagates_backend_errors() {
        let mut backend = MockModelBackend::new();
        backend.expect_name().return_const("mock");
        backend
            .expect_recommend()
            .returning(|_| Err(AppError::BackendUnavailable("connection refused".into())));

        let result = mix_and_match(Arc::new(backend), request()).await;
        assert!(matches!(result, Err(AppError::BackendUnavailable(_))));
    }

    #[tokio::test]
    async fn test_stats_passthrough() {
        let mut backend = MockModelBackend::new();
        backend
            .expect_stats()
            .returning(|| Ok(json!({ "total_items": 5000 })));

        let stats = stats(Arc::new(backend)).await.unwrap();
        assert_eq!(stats["total_items"], 5000);
    }
}
