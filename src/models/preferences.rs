use serde::{Deserialize, Serialize};

/// Style preferences submitted by the recommendation form
///
/// Every field is optional. An empty string is treated the same as a missing
/// field, so an untouched form input never counts as a preference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub body_type: Option<String>,
    /// Comma-separated free text, e.g. "navy, Dark Blue"
    pub preferred_colors: Option<String>,
    pub occasion: Option<String>,
    pub budget: Option<String>,
}

impl UserPreference {
    pub fn occasion(&self) -> Option<&str> {
        provided(&self.occasion)
    }

    pub fn body_type(&self) -> Option<&str> {
        provided(&self.body_type)
    }

    pub fn budget(&self) -> Option<&str> {
        provided(&self.budget)
    }

    /// Lower-cased, trimmed color tokens, or `None` when no colors were given
    ///
    /// Blank tokens are kept: `"red,"` yields `["red", ""]`, and the empty
    /// token matches every item color.
    pub fn preferred_colors(&self) -> Option<Vec<String>> {
        provided(&self.preferred_colors).map(|raw| {
            raw.to_lowercase()
                .split(',')
                .map(|color| color.trim().to_string())
                .collect()
        })
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
