//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "default_city": "Beijing",
//!   "default_format": "text",
//!   "forecast_days": 3
//! }
//! ```

use crate::config::schema::{self, DEFAULT_CITY, DEFAULT_FORMAT, FORECAST_DAYS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A typed setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Text(String),
    Integer(i64),
}

impl SettingValue {
    /// Strings quoted, numbers bare.
    pub fn quoted(&self) -> String {
        match self {
            SettingValue::Text(s) => format!("\"{}\"", s),
            SettingValue::Integer(n) => n.to_string(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(s) => write!(f, "{}", s),
            SettingValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// Output format for weather reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory configuration: every recognised key plus any unrecognised keys
/// found in the file.
///
/// Recognised keys are always present. Unrecognised keys are carried through
/// to the next save untouched and never validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    settings: BTreeMap<&'static str, SettingValue>,
    extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Configuration {
    fn default() -> Self {
        let settings = BTreeMap::from([
            (DEFAULT_CITY, SettingValue::Text(String::new())),
            (DEFAULT_FORMAT, SettingValue::Text("text".to_string())),
            (FORECAST_DAYS, SettingValue::Integer(3)),
        ]);

        Self {
            settings,
            extra: serde_json::Map::new(),
        }
    }
}

impl Configuration {
    /// The built-in default set.
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Value for a recognised key.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key)
    }

    /// Replace a recognised key's value.
    ///
    /// Callers validate `value` against the schema first; keys outside the
    /// registry are ignored.
    pub fn insert(&mut self, key: &str, value: SettingValue) {
        if let Some(spec) = schema::lookup_setting(key) {
            self.settings.insert(spec.key, value);
        }
    }

    /// Recognised settings in registry order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &SettingValue)> {
        schema::settings()
            .iter()
            .filter_map(|spec| self.settings.get(spec.key).map(|v| (spec.key, v)))
    }

    /// Unrecognised keys preserved from the file.
    pub fn extra(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }

    /// Configured default city, `None` when unset or empty.
    pub fn default_city(&self) -> Option<&str> {
        match self.settings.get(DEFAULT_CITY) {
            Some(SettingValue::Text(city)) if !city.trim().is_empty() => Some(city.as_str()),
            _ => None,
        }
    }

    pub fn default_format(&self) -> OutputFormat {
        match self.settings.get(DEFAULT_FORMAT) {
            Some(SettingValue::Text(format)) => format.parse().unwrap_or_default(),
            _ => OutputFormat::default(),
        }
    }

    /// Configured forecast length, clamped to the range `--forecast` accepts.
    pub fn forecast_days(&self) -> u8 {
        match self.settings.get(FORECAST_DAYS) {
            Some(SettingValue::Integer(days)) => {
                let clamped = (*days).clamp(schema::MIN_FORECAST_DAYS, schema::MAX_FORECAST_DAYS);
                u8::try_from(clamped).unwrap_or(3)
            }
            _ => 3,
        }
    }

    /// Overlay a stored document on the default set.
    ///
    /// Recognised keys replace their default; unrecognised keys are kept
    /// opaquely. A recognised key whose stored value has the wrong JSON type
    /// is reported as an error message naming the key.
    pub fn overlay(stored: serde_json::Map<String, serde_json::Value>) -> Result<Self, String> {
        let mut config = Self::defaults();

        for (key, value) in stored {
            match schema::lookup_setting(&key) {
                Some(spec) => {
                    let typed = spec.from_stored(&value)?;
                    config.settings.insert(spec.key, typed);
                }
                None => {
                    config.extra.insert(key, value);
                }
            }
        }

        Ok(config)
    }

    /// Serialise to a JSON object. Recognised keys win over extras of the
    /// same name.
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = self.extra.clone();
        for (key, value) in self.entries() {
            let json = match value {
                SettingValue::Text(s) => serde_json::Value::String(s.clone()),
                SettingValue::Integer(n) => serde_json::Value::from(*n),
            };
            map.insert(key.to_string(), json);
        }
        map
    }
}
