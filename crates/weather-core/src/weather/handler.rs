use tracing::info;

use crate::errors::LookupError;
use crate::weather::traits::WeatherProvider;
use crate::weather::types::{LookupRequest, WeatherReport};

/// Geocode the requested city and fetch its weather.
///
/// The forecast is fetched only when the request asks for one.
pub fn lookup_weather(
    provider: &dyn WeatherProvider,
    request: &LookupRequest,
) -> Result<WeatherReport, LookupError> {
    let city = request.city.trim();
    if city.is_empty() {
        return Err(LookupError::MissingCity);
    }

    info!(
        event = "core.weather.lookup_started",
        city = city,
        forecast_days = ?request.forecast_days
    );

    let location = provider.geocode(city)?;
    let current = provider.current(location.latitude, location.longitude)?;
    let forecast = match request.forecast_days {
        Some(days) => Some(provider.forecast(location.latitude, location.longitude, days)?),
        None => None,
    };

    info!(
        event = "core.weather.lookup_completed",
        city = location.name,
        country = location.country
    );

    Ok(WeatherReport {
        location,
        current,
        forecast,
    })
}
