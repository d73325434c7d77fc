use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Clothing category of a catalog item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Activewear,
}

/// A single clothing entry with the tags it is scored against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub category: Category,
    pub style: String,
    pub colors: Vec<String>,
    pub occasions: Vec<String>,
    pub body_types: Vec<String>,
    pub budget_ranges: Vec<String>,
    pub description: String,
}

impl CatalogItem {
    /// Creates a catalog item from string slices
    pub fn new(
        category: Category,
        style: &str,
        colors: &[&str],
        occasions: &[&str],
        body_types: &[&str],
        budget_ranges: &[&str],
        description: &str,
    ) -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
        Self {
            category,
            style: style.to_string(),
            colors: owned(colors),
            occasions: owned(occasions),
            body_types: owned(body_types),
            budget_ranges: owned(budget_ranges),
            description: description.to_string(),
        }
    }

    /// Color shown to the user for this item
    pub fn primary_color(&self) -> &str {
        self.colors.first().map(String::as_str).unwrap_or_default()
    }

    /// Occasion reported when the user did not pick one
    pub fn primary_occasion(&self) -> &str {
        self.occasions.first().map(String::as_str).unwrap_or_default()
    }

    fn validate(&self) -> AppResult<()> {
        let sets = [
            ("colors", &self.colors),
            ("occasions", &self.occasions),
            ("bodyTypes", &self.body_types),
            ("budgetRanges", &self.budget_ranges),
        ];

        for (field, values) in sets {
            if values.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "Catalog item '{}' has no {}",
                    self.style, field
                )));
            }
        }

        Ok(())
    }
}

/// Validated, immutable set of items the scorer ranks
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting items with an empty tag set
    pub fn new(items: Vec<CatalogItem>) -> AppResult<Self> {
        for item in &items {
            item.validate()?;
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of catalog items
    pub fn from_json(json: &str) -> AppResult<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        use Category::*;

        let items = vec![
            CatalogItem::new(
                Tops,
                "Classic White Button-Down",
                &["white", "light blue", "cream"],
                &["business", "casual", "formal"],
                &["slim", "athletic", "average"],
                &["medium", "high"],
                "A timeless piece that works for any occasion. Versatile and professional.",
            ),
            CatalogItem::new(
                Bottoms,
                "Dark Wash Jeans",
                &["dark blue", "black"],
                &["casual", "date"],
                &["slim", "athletic", "average", "curvy"],
                &["low", "medium"],
                "Perfect for casual outings and can be dressed up or down.",
            ),
            CatalogItem::new(
                Dresses,
                "Little Black Dress",
                &["black"],
                &["formal", "party", "date"],
                &["slim", "athletic", "curvy"],
                &["medium", "high", "luxury"],
                "The ultimate versatile piece for any formal occasion.",
            ),
            CatalogItem::new(
                Outerwear,
                "Blazer",
                &["navy", "black", "gray"],
                &["business", "formal"],
                &["slim", "athletic", "average"],
                &["medium", "high"],
                "Adds structure and professionalism to any outfit.",
            ),
            CatalogItem::new(
                Activewear,
                "Athletic Leggings",
                &["black", "gray", "navy"],
                &["workout", "casual"],
                &["slim", "athletic", "average", "curvy", "plus-size"],
                &["low", "medium"],
                "Comfortable and functional for workouts and casual wear.",
            ),
            CatalogItem::new(
                Tops,
                "Cashmere Sweater",
                &["beige", "gray", "navy", "cream"],
                &["casual", "business"],
                &["slim", "athletic", "average"],
                &["high", "luxury"],
                "Luxurious and warm, perfect for cooler weather.",
            ),
            CatalogItem::new(
                Bottoms,
                "Tailored Trousers",
                &["black", "navy", "gray"],
                &["business", "formal"],
                &["slim", "athletic", "average", "curvy"],
                &["medium", "high"],
                "Professional and polished for business settings.",
            ),
            CatalogItem::new(
                Dresses,
                "Midi Wrap Dress",
                &["floral", "solid colors"],
                &["casual", "date", "party"],
                &["curvy", "average", "plus-size"],
                &["medium", "high"],
                "Flattering silhouette that works for many body types.",
            ),
        ];

        Self { items }
    }
}
