//! weather-core: Core library for the weather-cli command-line tool
//!
//! # Main Entry Points
//!
//! - [`config`] - Persistent user defaults (city, format, forecast length)
//! - [`weather`] - Geocoding and weather lookups against Open-Meteo
//! - [`format`] - Text and JSON rendering of weather reports

pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod logging;
pub mod weather;

// Re-export commonly used types at crate root for convenience
pub use config::{ConfigAccessor, ConfigStore, Configuration, OutputFormat, SettingValue};
pub use errors::{ConfigError, LookupError, WeatherError};
pub use weather::{LookupRequest, OpenMeteoClient, WeatherProvider, WeatherReport};

// Re-export logging initialization
pub use logging::init_logging;
