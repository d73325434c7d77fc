use serde::{Deserialize, Serialize};

use crate::models::{CatalogItem, UserPreference};

/// Weight of each factor in the match score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    pub occasion: f64,
    pub body_type: f64,
    pub budget: f64,
    pub color: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            occasion: 0.4,
            body_type: 0.3,
            budget: 0.2,
            color: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn is_valid(&self) -> bool {
        [self.occasion, self.body_type, self.budget, self.color]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Calculate a confidence score (0-1) for a catalog item against user preferences
///
/// Scoring formula:
/// score = (
///     occasion_match  * 0.4 +
///     body_type_match * 0.3 +
///     budget_match    * 0.2 +
///     color_match     * 0.1
/// ) / (0.4 + 0.3 + 0.2 + 0.1)
///
/// Every weight is added to the denominator whether or not the matching
/// preference was supplied, so a request with no preferences scores 0.
/// With the default weights the denominator sums to 0.9999999999999999 in
/// f64, so a lone color match scores 0.10000000000000002 and still clears a
/// strict `> 0.1` threshold.
pub fn calculate_match_score(
    item: &CatalogItem,
    preferences: &UserPreference,
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;
    let mut factors = 0.0;

    if preferences
        .occasion()
        .is_some_and(|occasion| contains(&item.occasions, occasion))
    {
        score += weights.occasion;
    }
    factors += weights.occasion;

    if preferences
        .body_type()
        .is_some_and(|body_type| contains(&item.body_types, body_type))
    {
        score += weights.body_type;
    }
    factors += weights.body_type;

    if preferences
        .budget()
        .is_some_and(|budget| contains(&item.budget_ranges, budget))
    {
        score += weights.budget;
    }
    factors += weights.budget;

    if preferences
        .preferred_colors()
        .is_some_and(|colors| has_color_match(&item.colors, &colors))
    {
        score += weights.color;
    }
    factors += weights.color;

    if factors > 0.0 {
        (score / factors).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[inline]
fn contains(values: &[String], wanted: &str) -> bool {
    values.iter().any(|value| value == wanted)
}

/// True when any user color is a substring of any item color, ignoring case
///
/// `user_colors` must already be lower-cased.
fn has_color_match(item_colors: &[String], user_colors: &[String]) -> bool {
    user_colors.iter().any(|color| {
        item_colors
            .iter()
            .any(|item_color| item_color.to_lowercase().contains(color.as_str()))
    })
}
