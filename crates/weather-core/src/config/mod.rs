//! # Configuration System
//!
//! Persistent user defaults for weather-cli, stored as JSON at
//! `~/.weather-cli/config.json` (override with `WEATHER_CLI_CONFIG_FILE`).
//!
//! | key | type | constraint |
//! |---|---|---|
//! | `default_city` | string | none |
//! | `default_format` | string | `text` or `json` |
//! | `forecast_days` | integer | 1..=7 |
//!
//! Loading always starts from the built-in defaults and overlays the stored
//! values, so every key is present even if the file predates it. A missing
//! file is created on first load. A corrupt file is an error; an unreadable
//! one falls back to defaults.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use weather_core::config::{ConfigAccessor, ConfigStore, parse_assignment};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let accessor = ConfigAccessor::new(ConfigStore::from_env());
//!     let assignment = parse_assignment("default_city=Beijing")?;
//!     accessor.set(&assignment.key, &assignment.value)?;
//!     println!("{}", accessor.show()?);
//!     Ok(())
//! }
//! ```

pub mod accessor;
pub mod assignment;
pub mod display;
pub mod schema;
pub mod store;
pub mod types;

// Public API exports
pub use accessor::ConfigAccessor;
pub use assignment::{Assignment, parse_assignment};
pub use display::render_configuration;
pub use schema::{Constraint, SettingKind, SettingSpec, lookup_setting, valid_keys};
pub use store::{CONFIG_FILE_ENV, ConfigStore};
pub use types::{Configuration, OutputFormat, SettingValue};
