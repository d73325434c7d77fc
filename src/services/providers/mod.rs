/// Model backend abstraction
///
/// The outfit model runs as a separate service. Handlers talk to it through
/// [`ModelBackend`] so the HTTP client can be swapped for a fake in tests.
use serde_json::Value;

use crate::{error::AppResult, models::MixAndMatchRequest};

pub mod http;

pub use http::HttpModelBackend;

/// Trait for the external outfit model service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ModelBackend: Send + Sync {
    /// Requests mix & match outfits for a location, gender, theme and color
    ///
    /// Returns the backend's JSON body untouched.
    async fn recommend(&self, request: &MixAndMatchRequest) -> AppResult<Value>;

    /// Dataset statistics published by the backend
    async fn stats(&self) -> AppResult<Value>;

    /// Backend health report
    async fn health(&self) -> AppResult<Value>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
