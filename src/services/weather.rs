use crate::{
    error::{AppError, AppResult},
    models::{
        weather::normalize_city, CityWeather, LocationQuery, Season, WeatherInfo, WeatherTable,
    },
};

/// Above this temperature (°C) the season is summer
const SUMMER_ABOVE: i32 = 30;

/// Below this temperature (°C) the season is winter
const WINTER_BELOW: i32 = 20;

/// Resolves a city name or coordinate pair to weather and season
///
/// A non-empty city name takes precedence over coordinates. Unknown cities use
/// the table's fallback reading, and coordinates outside every region resolve
/// to the reference city. Only a query with neither a city nor both
/// coordinates is rejected.
pub fn resolve(table: &WeatherTable, query: &LocationQuery) -> AppResult<WeatherInfo> {
    let city_name = query
        .location
        .as_deref()
        .filter(|name| !name.is_empty());

    let (temperature, description, location) = match (city_name, query.lat, query.lon) {
        (Some(name), _, _) => match table.city(&normalize_city(name)) {
            Some(city) => (city.temperature, city.description.clone(), name.to_string()),
            None => {
                tracing::debug!(city = %name, "City not in weather table, using fallback");
                (
                    table.fallback.temperature,
                    table.fallback.description.clone(),
                    name.to_string(),
                )
            }
        },
        (None, Some(lat), Some(lon)) => {
            let city = city_for_coordinates(table, lat, lon)?;
            (city.temperature, city.description.clone(), city.name.clone())
        }
        _ => {
            return Err(AppError::InvalidInput(
                "Location or coordinates required".to_string(),
            ))
        }
    };

    let season = season_for(temperature, &description, &table.humidity_keywords);

    Ok(WeatherInfo {
        temperature,
        description,
        season,
        location,
    })
}

/// First region containing the point, else the reference city
fn city_for_coordinates(table: &WeatherTable, lat: f64, lon: f64) -> AppResult<&CityWeather> {
    let matched = table
        .regions
        .iter()
        .find(|region| region.bounds.contains(lat, lon))
        .and_then(|region| table.city(&region.city));

    match matched {
        Some(city) => Ok(city),
        None => {
            tracing::debug!(lat, lon, "Coordinates outside known regions, using reference city");
            table
                .reference_city()
                .ok_or_else(|| AppError::Internal("Weather table has no cities".to_string()))
        }
    }
}

/// Maps a reading to a season; the first matching rule wins
///
/// 1. hotter than 30 °C: summer
/// 2. colder than 20 °C: winter
/// 3. description mentions humidity: monsoon
/// 4. otherwise spring
pub fn season_for(temperature: i32, description: &str, humidity_keywords: &[String]) -> Season {
    if temperature > SUMMER_ABOVE {
        return Season::Summer;
    }
    if temperature < WINTER_BELOW {
        return Season::Winter;
    }

    let description = description.to_lowercase();
    if humidity_keywords
        .iter()
        .any(|keyword| description.contains(&keyword.to_lowercase()))
    {
        Season::Monsoon
    } else {
        Season::Spring
    }
}
