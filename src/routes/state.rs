use std::sync::Arc;

use crate::{
    config::Config,
    models::{Catalog, WeatherTable},
    services::{HttpModelBackend, ModelBackend, ScoringWeights, StyleModel},
};

/// Shared, read-only application state
///
/// Tables and weights are loaded once at startup and never mutated, so
/// handlers share them without locking.
pub struct AppState {
    pub catalog: Catalog,
    pub weights: ScoringWeights,
    pub weather: WeatherTable,
    pub model: StyleModel,
    pub backend: Arc<dyn ModelBackend>,
}

impl AppState {
    /// State with the built-in tables and the given backend
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        Self {
            catalog: Catalog::default(),
            weights: ScoringWeights::default(),
            weather: WeatherTable::default(),
            model: StyleModel::default(),
            backend,
        }
    }

    /// State built from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let backend =
            HttpModelBackend::new(config.model_backend_url.clone(), config.model_backend_timeout())?;

        let state = Self {
            catalog: config.load_catalog()?,
            weights: config.scoring_weights()?,
            weather: config.load_weather_table()?,
            model: StyleModel::default(),
            backend: Arc::new(backend),
        };

        if state.catalog.is_empty() {
            tracing::warn!("Catalog is empty, every recommendation will be the fallback");
        }

        tracing::info!(
            catalog_items = state.catalog.len(),
            weather_cities = state.weather.cities.len(),
            backend = state.backend.name(),
            "Application state initialized"
        );

        Ok(state)
    }
}
