//! Weather lookup: geocoding, current conditions and daily forecasts.

pub mod client;
pub mod codes;
pub mod handler;
pub mod traits;
pub mod types;

pub use client::OpenMeteoClient;
pub use codes::describe_weather_code;
pub use handler::lookup_weather;
pub use traits::WeatherProvider;
pub use types::{CurrentWeather, DailyForecast, Location, LookupRequest, WeatherReport};
