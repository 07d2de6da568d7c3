//! Registry of recognised configuration keys.
//!
//! Each setting declares the type its value is coerced to and an optional
//! constraint on the coerced value. The table is static and read-only; the
//! accessor consults it before any value reaches the store.

use crate::config::types::SettingValue;
use crate::errors::ConfigError;
use std::num::IntErrorKind;

/// Value type a setting is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Text,
    Integer,
}

impl SettingKind {
    pub fn name(&self) -> &'static str {
        match self {
            SettingKind::Text => "string",
            SettingKind::Integer => "integer",
        }
    }
}

/// Restriction applied to a coerced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be one of the listed strings.
    OneOf(&'static [&'static str]),
    /// Value must lie in `min..=max`.
    Range { min: i64, max: i64 },
}

impl Constraint {
    pub fn allows(&self, value: &SettingValue) -> bool {
        match (self, value) {
            (Constraint::OneOf(allowed), SettingValue::Text(s)) => allowed.contains(&s.as_str()),
            (Constraint::Range { min, max }, SettingValue::Integer(n)) => (*min..=*max).contains(n),
            _ => false,
        }
    }

    /// Human-readable list of legal values, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Constraint::OneOf(allowed) => allowed.join(", "),
            Constraint::Range { min, max } => {
                (*min..=*max).map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
            }
        }
    }
}

/// Static definition of one recognised setting.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingSpec {
    pub key: &'static str,
    pub description: &'static str,
    pub kind: SettingKind,
    pub constraint: Option<Constraint>,
}

pub const DEFAULT_CITY: &str = "default_city";
pub const DEFAULT_FORMAT: &str = "default_format";
pub const FORECAST_DAYS: &str = "forecast_days";

pub const FORMAT_CHOICES: &[&str] = &["text", "json"];
pub const MIN_FORECAST_DAYS: i64 = 1;
pub const MAX_FORECAST_DAYS: i64 = 7;

static SETTINGS: [SettingSpec; 3] = [
    SettingSpec {
        key: DEFAULT_CITY,
        description: "City looked up when none is given on the command line",
        kind: SettingKind::Text,
        constraint: None,
    },
    SettingSpec {
        key: DEFAULT_FORMAT,
        description: "Output format: text or json",
        kind: SettingKind::Text,
        constraint: Some(Constraint::OneOf(FORMAT_CHOICES)),
    },
    SettingSpec {
        key: FORECAST_DAYS,
        description: "Number of days shown by --forecast",
        kind: SettingKind::Integer,
        constraint: Some(Constraint::Range {
            min: MIN_FORECAST_DAYS,
            max: MAX_FORECAST_DAYS,
        }),
    },
];

/// All recognised settings, in display order.
pub fn settings() -> &'static [SettingSpec] {
    &SETTINGS
}

/// Look up a setting by key.
pub fn lookup_setting(key: &str) -> Option<&'static SettingSpec> {
    SETTINGS.iter().find(|s| s.key == key)
}

/// Comma-separated list of valid keys.
pub fn valid_keys() -> String {
    SETTINGS.iter().map(|s| s.key).collect::<Vec<_>>().join(", ")
}

impl SettingSpec {
    /// Convert raw command-line text into this setting's type.
    ///
    /// Integers that are numeric but do not fit in `i64` are reported as a
    /// constraint violation, not a type mismatch.
    pub fn coerce(&self, raw: &str) -> Result<SettingValue, ConfigError> {
        match self.kind {
            SettingKind::Text => Ok(SettingValue::Text(raw.to_string())),
            SettingKind::Integer => match raw.parse::<i64>() {
                Ok(n) => Ok(SettingValue::Integer(n)),
                Err(e) if matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
                {
                    Err(self.violation(raw))
                }
                Err(_) => Err(ConfigError::TypeMismatch {
                    key: self.key.to_string(),
                    value: raw.to_string(),
                    expected: self.kind.name(),
                }),
            },
        }
    }

    /// Check a coerced value against this setting's constraint.
    pub fn check(&self, value: &SettingValue) -> Result<(), ConfigError> {
        match &self.constraint {
            Some(constraint) if !constraint.allows(value) => Err(self.violation(&value.to_string())),
            _ => Ok(()),
        }
    }

    /// Coerce and validate in one step.
    pub fn parse(&self, raw: &str) -> Result<SettingValue, ConfigError> {
        let value = self.coerce(raw)?;
        self.check(&value)?;
        Ok(value)
    }

    /// Interpret a value read from the config file.
    ///
    /// Only the JSON type is checked. Constraints apply when a value is set;
    /// a hand-edited value outside them still loads and the typed getters on
    /// `Configuration` fall back to safe values.
    pub fn from_stored(&self, stored: &serde_json::Value) -> Result<SettingValue, String> {
        let value = match (self.kind, stored) {
            (SettingKind::Text, serde_json::Value::String(s)) => SettingValue::Text(s.clone()),
            (SettingKind::Integer, serde_json::Value::Number(n)) => match n.as_i64() {
                Some(n) => SettingValue::Integer(n),
                None => return Err(format!("'{}' must be an integer, found {}", self.key, n)),
            },
            (kind, other) => {
                return Err(format!(
                    "'{}' must be a {}, found {}",
                    self.key,
                    kind.name(),
                    other
                ));
            }
        };

        Ok(value)
    }

    fn violation(&self, value: &str) -> ConfigError {
        ConfigError::ConstraintViolation {
            key: self.key.to_string(),
            value: value.to_string(),
            allowed: self
                .constraint
                .as_ref()
                .map(Constraint::describe)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_known_and_unknown_keys() {
        assert_eq!(lookup_setting("forecast_days").unwrap().kind, SettingKind::Integer);
        assert_eq!(lookup_setting("default_city").unwrap().kind, SettingKind::Text);
        assert!(lookup_setting("not_a_key").is_none());
        assert!(lookup_setting("").is_none());
    }

    #[test]
    fn test_valid_keys_lists_every_setting() {
        assert_eq!(valid_keys(), "default_city, default_format, forecast_days");
    }

    #[test]
    fn test_range_describe_enumerates_values() {
        let constraint = Constraint::Range { min: 1, max: 7 };
        assert_eq!(constraint.describe(), "1, 2, 3, 4, 5, 6, 7");
    }

    #[test]
    fn test_integer_coercion() {
        let spec = lookup_setting(FORECAST_DAYS).unwrap();
        assert_eq!(spec.coerce("5").unwrap(), SettingValue::Integer(5));
        assert_eq!(spec.coerce("+3").unwrap(), SettingValue::Integer(3));

        let err = spec.coerce("five").unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));
        assert!(err.to_string().contains("expected integer"));

        let err = spec.coerce("3.5").unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));
    }

    #[test]
    fn test_integer_overflow_is_constraint_violation() {
        let spec = lookup_setting(FORECAST_DAYS).unwrap();
        let err = spec.coerce("99999999999999999999").unwrap_err();
        assert!(matches!(err, ConfigError::ConstraintViolation { .. }));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let spec = lookup_setting(FORECAST_DAYS).unwrap();
        assert!(spec.parse("1").is_ok());
        assert!(spec.parse("7").is_ok());
        assert!(matches!(
            spec.parse("0").unwrap_err(),
            ConfigError::ConstraintViolation { .. }
        ));
        let err = spec.parse("8").unwrap_err();
        assert!(err.to_string().contains("1, 2, 3, 4, 5, 6, 7"));
    }

    #[test]
    fn test_format_choices() {
        let spec = lookup_setting(DEFAULT_FORMAT).unwrap();
        assert_eq!(spec.parse("json").unwrap(), SettingValue::Text("json".to_string()));
        let err = spec.parse("xml").unwrap_err();
        assert!(err.to_string().contains("text, json"));
    }

    #[test]
    fn test_text_accepts_empty_value() {
        let spec = lookup_setting(DEFAULT_CITY).unwrap();
        assert_eq!(spec.parse("").unwrap(), SettingValue::Text(String::new()));
    }

    #[test]
    fn test_from_stored_rejects_wrong_types() {
        let days = lookup_setting(FORECAST_DAYS).unwrap();
        assert_eq!(days.from_stored(&json!(4)).unwrap(), SettingValue::Integer(4));
        assert!(days.from_stored(&json!("4")).is_err());
        assert!(days.from_stored(&json!(4.5)).is_err());

        let city = lookup_setting(DEFAULT_CITY).unwrap();
        assert!(city.from_stored(&json!(null)).is_err());
    }

    #[test]
    fn test_from_stored_skips_constraints() {
        let days = lookup_setting(FORECAST_DAYS).unwrap();
        assert_eq!(days.from_stored(&json!(30)).unwrap(), SettingValue::Integer(30));

        let format = lookup_setting(DEFAULT_FORMAT).unwrap();
        assert_eq!(
            format.from_stored(&json!("xml")).unwrap(),
            SettingValue::Text("xml".to_string())
        );
    }
}
