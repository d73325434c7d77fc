use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CatalogItem, Category, UserPreference};

/// Identifier of the recommendation returned when nothing in the catalog matches
pub const FALLBACK_ID: &str = "default-1";

/// Confidence assigned to the fallback recommendation
pub const FALLBACK_CONFIDENCE: f64 = 0.7;

/// One ranked suggestion returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub id: String,
    pub category: Category,
    pub style: String,
    pub color: String,
    pub occasion: String,
    pub confidence: f64,
    pub description: String,
}

impl MatchResult {
    /// Builds a result for a scored catalog item
    pub fn from_item(item: &CatalogItem, preferences: &UserPreference, confidence: f64) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            category: item.category,
            style: item.style.clone(),
            color: item.primary_color().to_string(),
            occasion: preferences
                .occasion()
                .unwrap_or_else(|| item.primary_occasion())
                .to_string(),
            confidence,
            description: item.description.clone(),
        }
    }

    /// The wardrobe staple suggested when no catalog item clears the threshold
    pub fn fallback(preferences: &UserPreference) -> Self {
        Self {
            id: FALLBACK_ID.to_string(),
            category: Category::Tops,
            style: "Classic White Button-Down".to_string(),
            color: "white".to_string(),
            occasion: preferences.occasion().unwrap_or("casual").to_string(),
            confidence: FALLBACK_CONFIDENCE,
            description: "A versatile wardrobe staple that works for any occasion.".to_string(),
        }
    }
}

/// Response body for the recommendations endpoint
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<MatchResult>,
    pub message: String,
}

impl RecommendationResponse {
    pub fn new(recommendations: Vec<MatchResult>) -> Self {
        let message = format!(
            "Found {} style recommendations for you!",
            recommendations.len()
        );
        Self {
            success: true,
            recommendations,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    #[test]
    fn test_from_item_uses_preference_occasion() {
        let catalog = Catalog::default();
        let prefs = UserPreference {
            occasion: Some("date".to_string()),
            ..Default::default()
        };

        let result = MatchResult::from_item(&catalog.items()[0], &prefs, 0.5);
        assert_eq!(result.occasion, "date");
        assert_eq!(result.color, "white");
        assert_eq!(result.category, Category::Tops);
    }

    #[test]
    fn test_from_item_falls_back_to_item_occasion() {
        let catalog = Catalog::default();
        let result = MatchResult::from_item(&catalog.items()[4], &UserPreference::default(), 0.3);
        assert_eq!(result.occasion, "workout");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let catalog = Catalog::default();
        let prefs = UserPreference::default();
        let a = MatchResult::from_item(&catalog.items()[0], &prefs, 0.5);
        let b = MatchResult::from_item(&catalog.items()[0], &prefs, 0.5);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_response_message() {
        let response = RecommendationResponse::new(vec![MatchResult::fallback(
            &UserPreference::default(),
        )]);
        assert_eq!(response.message, "Found 1 style recommendations for you!");
        assert!(response.success);
    }
}
