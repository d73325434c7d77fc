use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Season inferred from a weather reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
    Spring,
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
            Season::Monsoon => "Monsoon",
            Season::Spring => "Spring",
        };
        write!(f, "{}", name)
    }
}

/// Fixed reading for a named city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityWeather {
    /// Lookup key: lower-case, no whitespace
    pub key: String,
    /// Display name reported back to the client
    pub name: String,
    pub temperature: i32,
    pub description: String,
}

impl CityWeather {
    fn new(name: &str, temperature: i32, description: &str) -> Self {
        Self {
            key: normalize_city(name),
            name: name.to_string(),
            temperature,
            description: description.to_string(),
        }
    }
}

/// Inclusive lat/lon rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// Area whose coordinates resolve to a city of the table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// Key of the city in [`WeatherTable::cities`]
    pub city: String,
    pub bounds: BoundingBox,
}

/// Reading used for cities the table does not know
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallbackWeather {
    pub temperature: i32,
    pub description: String,
}

/// Static weather data the resolver works over
///
/// The first city is the reference city: coordinates outside every region
/// resolve to it. Regions are tested in order and the first match wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherTable {
    pub cities: Vec<CityWeather>,
    pub regions: Vec<Region>,
    pub fallback: FallbackWeather,
    /// Description keywords that mark a humid (monsoon) reading
    pub humidity_keywords: Vec<String>,
}

impl WeatherTable {
    /// Parses and validates a JSON weather table
    pub fn from_json(json: &str) -> AppResult<Self> {
        let table: WeatherTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Checks that the reference city exists and every region points at a known city
    pub fn validate(&self) -> AppResult<()> {
        if self.cities.is_empty() {
            return Err(AppError::InvalidInput(
                "Weather table must contain at least one city".to_string(),
            ));
        }

        for region in &self.regions {
            if self.city(&region.city).is_none() {
                return Err(AppError::InvalidInput(format!(
                    "Region refers to unknown city '{}'",
                    region.city
                )));
            }
        }

        Ok(())
    }

    /// Looks up a city by its normalized key
    pub fn city(&self, key: &str) -> Option<&CityWeather> {
        self.cities.iter().find(|city| city.key == key)
    }

    /// The city unmatched coordinates default to
    pub fn reference_city(&self) -> Option<&CityWeather> {
        self.cities.first()
    }
}

impl Default for WeatherTable {
    fn default() -> Self {
        let cities = vec![
            CityWeather::new("Jakarta", 32, "Panas dan lembab"),
            CityWeather::new("Bandung", 25, "Sejuk dan nyaman"),
            CityWeather::new("Surabaya", 31, "Panas dan cerah"),
            CityWeather::new("Yogyakarta", 28, "Hangat dan berawan"),
            CityWeather::new("Medan", 30, "Panas dan lembab"),
            CityWeather::new("Semarang", 29, "Hangat dan lembab"),
            CityWeather::new("Makassar", 33, "Sangat panas dan cerah"),
            CityWeather::new("Palembang", 31, "Panas dan lembab"),
            CityWeather::new("Denpasar", 30, "Tropis dan cerah"),
            CityWeather::new("Balikpapan", 32, "Panas dan lembab"),
            CityWeather::new("Bali", 28, "Tropis dan nyaman"),
            CityWeather::new("Malang", 24, "Sejuk dan segar"),
            CityWeather::new("Solo", 29, "Hangat dan cerah"),
            CityWeather::new("Bogor", 26, "Sejuk dan lembab"),
            CityWeather::new("Depok", 30, "Hangat dan lembab"),
            CityWeather::new("Tangerang", 31, "Panas dan lembab"),
            CityWeather::new("Bekasi", 30, "Hangat dan lembab"),
        ];

        let region = |city: &str, min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64| Region {
            city: city.to_string(),
            bounds: BoundingBox {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            },
        };

        let regions = vec![
            region("jakarta", -6.5, -6.0, 106.5, 107.0),
            region("bandung", -7.0, -6.5, 107.0, 108.0),
            region("bali", -8.5, -8.0, 114.0, 115.5),
            region("yogyakarta", -7.5, -7.0, 110.0, 111.0),
            region("surabaya", -7.5, -7.0, 112.0, 113.0),
        ];

        Self {
            cities,
            regions,
            fallback: FallbackWeather {
                temperature: 28,
                description: "Cuaca nyaman".to_string(),
            },
            humidity_keywords: vec!["lembab".to_string()],
        }
    }
}

/// Lookup key for a city name: lower-case with all whitespace removed
pub fn normalize_city(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Location submitted for a weather lookup: a city name or a coordinate pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationQuery {
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl LocationQuery {
    pub fn city(name: &str) -> Self {
        Self {
            location: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn coordinates(lat: f64, lon: f64) -> Self {
        Self {
            location: None,
            lat: Some(lat),
            lon: Some(lon),
        }
    }
}

/// Resolved weather for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherInfo {
    pub temperature: i32,
    pub description: String,
    pub season: Season,
    pub location: String,
}
