//! Weather provider trait definition.

use crate::errors::LookupError;
use crate::weather::types::{CurrentWeather, DailyForecast, Location};

/// Source of geocoding and weather data.
///
/// [`crate::weather::OpenMeteoClient`] is the production implementation;
/// tests substitute canned providers.
pub trait WeatherProvider {
    /// Resolve a city name to its coordinates.
    fn geocode(&self, city: &str) -> Result<Location, LookupError>;

    /// Conditions right now at the given coordinates.
    fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather, LookupError>;

    /// Daily forecast for the next `days` days, starting today.
    fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Vec<DailyForecast>, LookupError>;
}
