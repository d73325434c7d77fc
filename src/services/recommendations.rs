use crate::{
    models::{Catalog, MatchResult, UserPreference},
    services::scoring::{calculate_match_score, ScoringWeights},
};

/// Items must score strictly above this to be recommended
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Ranks the catalog against the user's preferences
///
/// Scores every item, drops those at or below [`MIN_CONFIDENCE`], sorts the
/// rest by descending confidence (ties keep catalog order) and keeps the top
/// [`MAX_RECOMMENDATIONS`]. When nothing qualifies, a single fallback
/// recommendation is returned instead.
pub fn recommend(
    catalog: &Catalog,
    preferences: &UserPreference,
    weights: &ScoringWeights,
) -> Vec<MatchResult> {
    let mut scored: Vec<_> = catalog
        .items()
        .iter()
        .map(|item| (item, calculate_match_score(item, preferences, weights)))
        .filter(|(_, confidence)| *confidence > MIN_CONFIDENCE)
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    let recommendations: Vec<MatchResult> = scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(item, confidence)| MatchResult::from_item(item, preferences, confidence))
        .collect();

    if recommendations.is_empty() {
        tracing::debug!(
            catalog_size = catalog.len(),
            "No catalog item above threshold, using fallback recommendation"
        );
        return vec![MatchResult::fallback(preferences)];
    }

    recommendations
}
