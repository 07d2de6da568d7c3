//! Open-Meteo HTTP client.
//!
//! Requests are blocking with a fixed timeout. Response bodies are decoded by
//! the free `parse_*` functions so decoding can be exercised without a network.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::errors::LookupError;
use crate::weather::traits::WeatherProvider;
use crate::weather::types::{CurrentWeather, DailyForecast, Location};

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct OpenMeteoClient {
    http: reqwest::blocking::Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, LookupError> {
        Self::with_endpoints(GEOCODING_URL, FORECAST_URL)
    }

    /// Client against alternative endpoints (mirrors, local test servers).
    pub fn with_endpoints(
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("weather-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::RequestFailed {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        })
    }

    fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<String, LookupError> {
        debug!(event = "core.weather.request_started", url = url);

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!(event = "core.weather.request_failed", url = url, error = %e);
                LookupError::RequestFailed {
                    message: e.to_string(),
                }
            })?;

        response.text().map_err(|e| LookupError::RequestFailed {
            message: format!("Failed to read response body: {}", e),
        })
    }
}

impl WeatherProvider for OpenMeteoClient {
    fn geocode(&self, city: &str) -> Result<Location, LookupError> {
        let body = self.fetch(
            &self.geocoding_url,
            &[("name", city.to_string()), ("count", "1".to_string())],
        )?;
        let location = parse_geocoding_response(city, &body)?;
        debug!(
            event = "core.weather.geocode_completed",
            city = city,
            name = location.name,
            country = location.country
        );
        Ok(location)
    }

    fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather, LookupError> {
        let body = self.fetch(
            &self.forecast_url,
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "temperature_2m,weather_code".to_string()),
            ],
        )?;
        parse_current_response(&body)
    }

    fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Vec<DailyForecast>, LookupError> {
        let body = self.fetch(
            &self.forecast_url,
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,weather_code".to_string(),
                ),
                ("forecast_days", days.to_string()),
            ],
        )?;
        let forecast = parse_forecast_response(&body)?;
        debug!(event = "core.weather.forecast_completed", days = forecast.len());
        Ok(forecast)
    }
}

#[derive(Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Deserialize)]
struct GeocodingResult {
    name: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    current: Option<CurrentBlock>,
}

#[derive(Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<f64>,
    weather_code: Option<u16>,
    time: Option<String>,
}

#[derive(Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    daily: Option<DailyBlock>,
}

#[derive(Deserialize)]
struct DailyBlock {
    #[serde(default)]
    time: Vec<chrono::NaiveDate>,
    #[serde(default)]
    temperature_2m_max: Vec<f64>,
    #[serde(default)]
    temperature_2m_min: Vec<f64>,
    #[serde(default)]
    weather_code: Vec<u16>,
}

fn decode<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::InvalidResponse {
        message: e.to_string(),
    })
}

/// Decode a geocoding response, taking the first match.
pub fn parse_geocoding_response(city: &str, body: &str) -> Result<Location, LookupError> {
    let response: GeocodingResponse = decode(body)?;

    let Some(first) = response.results.and_then(|r| r.into_iter().next()) else {
        warn!(event = "core.weather.city_not_found", city = city);
        return Err(LookupError::CityNotFound {
            city: city.to_string(),
        });
    };

    Ok(Location {
        name: first.name.unwrap_or_else(|| city.to_string()),
        country: first.country.unwrap_or_else(|| "Unknown".to_string()),
        latitude: first.latitude,
        longitude: first.longitude,
    })
}

/// Decode the `current` block of a forecast response.
///
/// A missing block yields empty fields rather than an error.
pub fn parse_current_response(body: &str) -> Result<CurrentWeather, LookupError> {
    let response: CurrentResponse = decode(body)?;
    let current = response.current.unwrap_or(CurrentBlock {
        temperature_2m: None,
        weather_code: None,
        time: None,
    });

    Ok(CurrentWeather {
        temperature: current.temperature_2m,
        weather_code: current.weather_code,
        time: current.time,
    })
}

/// Decode the `daily` block of a forecast response into one entry per day.
pub fn parse_forecast_response(body: &str) -> Result<Vec<DailyForecast>, LookupError> {
    let response: ForecastResponse = decode(body)?;
    let Some(daily) = response.daily else {
        return Ok(Vec::new());
    };

    let days = daily.time.len();
    if daily.temperature_2m_max.len() != days
        || daily.temperature_2m_min.len() != days
        || daily.weather_code.len() != days
    {
        return Err(LookupError::InvalidResponse {
            message: "daily arrays have mismatched lengths".to_string(),
        });
    }

    Ok(daily
        .time
        .into_iter()
        .zip(daily.temperature_2m_max)
        .zip(daily.temperature_2m_min)
        .zip(daily.weather_code)
        .map(|(((date, max_temp), min_temp), weather_code)| DailyForecast {
            date,
            max_temp,
            min_temp,
            weather_code,
        })
        .collect())
}
