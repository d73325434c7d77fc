use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Hint returned alongside 503s so operators know what to start
const BACKEND_UNAVAILABLE_DETAILS: &str =
    "Start the model backend and check MODEL_BACKEND_URL";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Model backend returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Model backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code the error maps to at the HTTP boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Serialization(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = match self {
            AppError::InvalidInput(msg) => json!({ "error": msg }),
            AppError::Upstream { message, .. } => json!({ "error": message }),
            AppError::BackendUnavailable(_) => json!({
                "error": "Model backend is not available",
                "details": BACKEND_UNAVAILABLE_DETAILS,
            }),
            AppError::Serialization(_) | AppError::Internal(_) => {
                json!({ "error": "Internal server error" })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Malformed or mistyped request bodies are client errors
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;
