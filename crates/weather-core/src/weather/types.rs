use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geocoded city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Conditions at the time of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub weather_code: Option<u16>,
    /// Observation time as reported by the service (local ISO-8601, no offset).
    pub time: Option<String>,
}

/// One day of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub max_temp: f64,
    pub min_temp: f64,
    pub weather_code: u16,
}

/// What the caller wants looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub city: String,
    /// `Some(n)` also fetches an n-day forecast.
    pub forecast_days: Option<u8>,
}

impl LookupRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            forecast_days: None,
        }
    }

    pub fn with_forecast_days(mut self, days: Option<u8>) -> Self {
        self.forecast_days = days;
        self
    }
}

/// Everything needed to render a lookup result.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentWeather,
    pub forecast: Option<Vec<DailyForecast>>,
}
