//! HTTP client for the outfit model backend
use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::MixAndMatchRequest,
    services::providers::ModelBackend,
};

/// Error body returned by the backend on failure
#[derive(Debug, Deserialize)]
struct BackendError {
    error: Option<String>,
}

#[derive(Clone)]
pub struct HttpModelBackend {
    http_client: HttpClient,
    base_url: String,
}

impl HttpModelBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and decodes the JSON body
    ///
    /// `failure_message` is reported when the backend fails without an
    /// `error` field of its own.
    async fn send(&self, request: RequestBuilder, failure_message: &str) -> AppResult<Value> {
        let response = request.send().await.map_err(classify_transport_error)?;

        if !response.status().is_success() {
            return Err(upstream_error(response, failure_message).await);
        }

        response.json().await.map_err(classify_transport_error)
    }
}

/// Connection failures and timeouts mean the backend is down, not broken
///
/// Applies to the body read too: the client timeout covers the whole exchange.
fn classify_transport_error(err: reqwest::Error) -> AppError {
    if err.is_connect() || err.is_timeout() {
        AppError::BackendUnavailable(err.to_string())
    } else {
        AppError::HttpClient(err)
    }
}

async fn upstream_error(response: Response, failure_message: &str) -> AppError {
    let status = response.status();
    let message = response
        .json::<BackendError>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| failure_message.to_string());

    tracing::warn!(
        status = status.as_u16(),
        message = %message,
        provider = "http",
        "Model backend returned an error"
    );

    AppError::Upstream {
        status: status.as_u16(),
        message,
    }
}

#[async_trait::async_trait]
impl ModelBackend for HttpModelBackend {
    async fn recommend(&self, request: &MixAndMatchRequest) -> AppResult<Value> {
        let body = self
            .send(
                self.http_client.post(self.url("/api/recommend")).json(request),
                "Failed to get recommendations from the model",
            )
            .await?;

        tracing::info!(
            location = %request.location,
            theme = %request.theme,
            provider = "http",
            "Mix & match recommendations received"
        );

        Ok(body)
    }

    async fn stats(&self) -> AppResult<Value> {
        self.send(
            self.http_client.get(self.url("/api/stats")),
            "Failed to get statistics from the backend",
        )
        .await
    }

    async fn health(&self) -> AppResult<Value> {
        self.send(
            self.http_client.get(self.url("/api/health")),
            "Failed to get health from the backend",
        )
        .await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
