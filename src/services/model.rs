use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

/// Static description of the style model
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub version: String,
    pub trained_on: String,
    pub accuracy: String,
    pub last_updated: NaiveDate,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            trained_on: "5000 style samples".to_string(),
            accuracy: "87%".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        }
    }
}

/// Affinity for each outfit theme
#[derive(Debug, Clone, Serialize)]
pub struct StyleScores {
    pub casual: f64,
    pub business: f64,
    pub formal: f64,
    pub party: f64,
    pub workout: f64,
}

/// Affinity for each color family
#[derive(Debug, Clone, Serialize)]
pub struct ColorPreferences {
    pub neutral: f64,
    pub bold: f64,
    pub pastel: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub style_scores: StyleScores,
    pub color_preferences: ColorPreferences,
    pub confidence: f64,
}

/// Simulated style predictor
///
/// Built once at startup and shared through the application state. Scores are
/// drawn uniformly from `[base, base + spread)` per field; the user features
/// are accepted but do not influence the draw.
#[derive(Debug, Clone, Default)]
pub struct StyleModel {
    info: ModelInfo,
}

impl StyleModel {
    pub fn info(&self) -> &ModelInfo {
        &self.info
    }

    pub fn predict(&self, features: &serde_json::Value) -> Prediction {
        let mut rng = rand::rng();
        let mut draw = |base: f64, spread: f64| base + rng.random_range(0.0..spread);

        tracing::debug!(
            feature_count = features.as_object().map_or(0, |f| f.len()),
            version = %self.info.version,
            "Generating style prediction"
        );

        Prediction {
            style_scores: StyleScores {
                casual: draw(0.4, 0.3),
                business: draw(0.3, 0.3),
                formal: draw(0.2, 0.3),
                party: draw(0.3, 0.3),
                workout: draw(0.2, 0.3),
            },
            color_preferences: ColorPreferences {
                neutral: draw(0.4, 0.4),
                bold: draw(0.2, 0.3),
                pastel: draw(0.3, 0.3),
            },
            confidence: draw(0.7, 0.3),
        }
    }
}
