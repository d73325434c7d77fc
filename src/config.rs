use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    models::{Catalog, WeatherTable},
    services::ScoringWeights,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the outfit model backend
    #[serde(default = "default_model_backend_url")]
    pub model_backend_url: String,

    /// Timeout for calls to the model backend, in seconds
    #[serde(default = "default_model_backend_timeout_secs")]
    pub model_backend_timeout_secs: u64,

    /// JSON file replacing the built-in catalog
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// JSON file replacing the built-in weather table
    #[serde(default)]
    pub weather_table_path: Option<String>,

    #[serde(default = "default_occasion_weight")]
    pub score_weight_occasion: f64,

    #[serde(default = "default_body_type_weight")]
    pub score_weight_body_type: f64,

    #[serde(default = "default_budget_weight")]
    pub score_weight_budget: f64,

    #[serde(default = "default_color_weight")]
    pub score_weight_color: f64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_model_backend_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_model_backend_timeout_secs() -> u64 {
    10
}

fn default_occasion_weight() -> f64 {
    ScoringWeights::default().occasion
}

fn default_body_type_weight() -> f64 {
    ScoringWeights::default().body_type
}

fn default_budget_weight() -> f64 {
    ScoringWeights::default().budget
}

fn default_color_weight() -> f64 {
    ScoringWeights::default().color
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn model_backend_timeout(&self) -> Duration {
        Duration::from_secs(self.model_backend_timeout_secs)
    }

    /// Scoring weights, rejecting negative or non-finite values
    pub fn scoring_weights(&self) -> anyhow::Result<ScoringWeights> {
        let weights = ScoringWeights {
            occasion: self.score_weight_occasion,
            body_type: self.score_weight_body_type,
            budget: self.score_weight_budget,
            color: self.score_weight_color,
        };

        if !weights.is_valid() {
            anyhow::bail!("Scoring weights must be finite and non-negative: {:?}", weights);
        }

        Ok(weights)
    }

    /// The configured catalog, or the built-in one
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog from {}", path))?;
                Catalog::from_json(&json).with_context(|| format!("Invalid catalog in {}", path))
            }
            None => Ok(Catalog::default()),
        }
    }

    /// The configured weather table, or the built-in one
    pub fn load_weather_table(&self) -> anyhow::Result<WeatherTable> {
        match &self.weather_table_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read weather table from {}", path))?;
                WeatherTable::from_json(&json)
                    .with_context(|| format!("Invalid weather table in {}", path))
            }
            None => Ok(WeatherTable::default()),
        }
    }
}
