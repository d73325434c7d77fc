pub mod catalog;
pub mod preferences;
pub mod recommendation;
pub mod stylemate;
pub mod weather;

pub use catalog::{Catalog, CatalogItem, Category};
pub use preferences::UserPreference;
pub use recommendation::{MatchResult, RecommendationResponse};
pub use stylemate::{MixAndMatchRequest, MixAndMatchResponse};
pub use weather::{
    BoundingBox, CityWeather, FallbackWeather, LocationQuery, Region, Season, WeatherInfo,
    WeatherTable,
};
