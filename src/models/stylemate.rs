use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mix & match request forwarded to the model backend
///
/// Wire names follow the backend's form fields (`tema` is the outfit theme,
/// `warna` the base color). Missing fields deserialize as empty strings so
/// they are reported as validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixAndMatchRequest {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub gender: String,
    #[serde(rename = "tema", default)]
    pub theme: String,
    #[serde(rename = "warna", default)]
    pub color: String,
}

impl MixAndMatchRequest {
    /// Names of required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("location", &self.location),
            ("gender", &self.gender),
            ("tema", &self.theme),
            ("warna", &self.color),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Response returned to the client after a successful backend call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixAndMatchResponse {
    pub success: bool,
    /// Per-category outfit lists as produced by the backend
    pub recommendations: Value,
}
