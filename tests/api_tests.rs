use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use stylemate_api::{
    error::{AppError, AppResult},
    models::MixAndMatchRequest,
    routes::{create_router, AppState},
    services::{HttpModelBackend, ModelBackend},
};

/// Backend double returning canned responses
struct FakeBackend {
    recommend_result: fn(&MixAndMatchRequest) -> AppResult<Value>,
}

#[async_trait::async_trait]
impl ModelBackend for FakeBackend {
    async fn recommend(&self, request: &MixAndMatchRequest) -> AppResult<Value> {
        (self.recommend_result)(request)
    }

    async fn stats(&self) -> AppResult<Value> {
        Ok(json!({ "total_items": 5000, "model_categories": { "Atasan": 1200 } }))
    }

    async fn health(&self) -> AppResult<Value> {
        Ok(json!({ "status": "healthy", "model_loaded": true }))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn echo_backend() -> FakeBackend {
    FakeBackend {
        recommend_result: |request| {
            Ok(json!({
                "success": true,
                "recommendations": {
                    "Season": "Spring",
                    "weather_info": { "location": request.location },
                    "Atasan": [{ "productDisplayName": "Blue Shirt", "confidence": 0.8 }]
                }
            }))
        },
    }
}

fn create_test_server_with(backend: Arc<dyn ModelBackend>) -> TestServer {
    let state = Arc::new(AppState::new(backend));
    TestServer::new(create_router(state)).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with(Arc::new(echo_backend()))
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_header_is_set() {
    let server = create_test_server();
    let response = server.get("/health").await;
    let header = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_recommendations_ranked() {
    let server = create_test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "age": "25-34",
            "gender": "female",
            "bodyType": "slim",
            "preferredColors": "Navy",
            "occasion": "business",
            "budget": "medium"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Found 5 style recommendations for you!");

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 5);
    assert_eq!(recommendations[0]["style"], "Blazer");
    assert_eq!(recommendations[0]["category"], "Outerwear");
    assert_eq!(recommendations[0]["color"], "navy");
    assert_eq!(recommendations[0]["occasion"], "business");

    let confidences: Vec<f64> = recommendations
        .iter()
        .map(|r| r["confidence"].as_f64().unwrap())
        .collect();
    assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_recommendations_fallback() {
    let server = create_test_server();

    let response = server.post("/api/recommendations").json(&json!({})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Found 1 style recommendations for you!");
    assert_eq!(body["recommendations"][0]["id"], "default-1");
    assert_eq!(body["recommendations"][0]["confidence"], 0.7);
    assert_eq!(body["recommendations"][0]["occasion"], "casual");
}

#[tokio::test]
async fn test_weather_by_city() {
    let server = create_test_server();

    let response = server
        .post("/api/stylemate/weather")
        .json(&json!({ "location": "Jakarta" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["temperature"], 32);
    assert_eq!(body["description"], "Panas dan lembab");
    assert_eq!(body["season"], "Summer");
    assert_eq!(body["location"], "Jakarta");
}

#[tokio::test]
async fn test_weather_by_coordinates() {
    let server = create_test_server();

    let response = server
        .post("/api/stylemate/weather")
        .json(&json!({ "lat": -6.9, "lon": 107.6 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["location"], "Bandung");
    assert_eq!(body["temperature"], 25);
    assert_eq!(body["season"], "Spring");
}

#[tokio::test]
async fn test_weather_requires_location() {
    let server = create_test_server();

    let response = server.post("/api/stylemate/weather").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Location or coordinates required"));
}

#[tokio::test]
async fn test_mix_and_match_forwarded() {
    let server = create_test_server();

    let response = server
        .post("/api/stylemate/recommend")
        .json(&json!({
            "location": "Bandung",
            "gender": "Women",
            "tema": "casual",
            "warna": "blue"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["recommendations"]["Season"], "Spring");
    assert_eq!(body["recommendations"]["weather_info"]["location"], "Bandung");
}

#[tokio::test]
async fn test_mix_and_match_missing_field() {
    let server = create_test_server();

    let response = server
        .post("/api/stylemate/recommend")
        .json(&json!({ "location": "Bandung", "gender": "Women" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mix_and_match_upstream_error_status() {
    let backend = FakeBackend {
        recommend_result: |_| {
            Err(AppError::Upstream {
                status: 400,
                message: "Field 'warna' is required".to_string(),
            })
        },
    };
    let server = create_test_server_with(Arc::new(backend));

    let response = server
        .post("/api/stylemate/recommend")
        .json(&json!({
            "location": "Bandung",
            "gender": "Women",
            "tema": "casual",
            "warna": "blue"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Field 'warna' is required");
}

#[tokio::test]
async fn test_backend_unavailable_maps_to_503() {
    let backend = HttpModelBackend::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let server = create_test_server_with(Arc::new(backend));

    let response = server.get("/api/stylemate/stats").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_stats_and_health_passthrough() {
    let server = create_test_server();

    let stats: Value = server.get("/api/stylemate/stats").await.json();
    assert_eq!(stats["total_items"], 5000);

    let health: Value = server.get("/api/stylemate/health").await.json();
    assert_eq!(health["model_loaded"], true);
}

#[tokio::test]
async fn test_model_status_and_predict() {
    let server = create_test_server();

    let status = server.get("/api/model").await;
    status.assert_status_ok();
    let body: Value = status.json();
    assert_eq!(body["status"], "Model is ready");
    assert_eq!(body["modelInfo"]["version"], "1.0.0");

    let prediction = server
        .post("/api/model")
        .json(&json!({ "gender": "male", "occasion": "business" }))
        .await;
    prediction.assert_status_ok();
    let body: Value = prediction.json();
    assert_eq!(body["success"], true);
    let confidence = body["predictions"]["confidence"].as_f64().unwrap();
    assert!((0.7..=1.0).contains(&confidence));
}

#[tokio::test]
async fn test_mistyped_body_is_json_bad_request() {
    let server = create_test_server();

    let weather = server
        .post("/api/stylemate/weather")
        .json(&json!({ "lat": "north", "lon": 1 }))
        .await;
    weather.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = weather.json();
    assert!(body["error"].is_string());

    let recommendations = server
        .post("/api/recommendations")
        .json(&json!({ "occasion": 5 }))
        .await;
    recommendations.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = recommendations.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_json_body_is_json_bad_request() {
    let server = create_test_server();

    let response = server
        .post("/api/stylemate/recommend")
        .text("location=Bandung")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}
