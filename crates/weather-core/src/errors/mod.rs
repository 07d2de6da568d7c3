use std::error::Error;

/// Base trait for all application errors
pub trait WeatherError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input rather than the environment
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown config key '{key}'. Valid keys: {valid_keys}")]
    UnknownKey { key: String, valid_keys: String },

    #[error("Invalid value '{value}' for '{key}': expected {expected}")]
    TypeMismatch {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid value '{value}' for '{key}'. Allowed values: {allowed}")]
    ConstraintViolation {
        key: String,
        value: String,
        allowed: String,
    },

    #[error("Invalid assignment '{assignment}': {message}. Expected key=value, e.g. default_city=Beijing")]
    BadAssignment { assignment: String, message: String },

    #[error("Config file '{path}' is malformed: {message}. Fix it by hand or run --config-reset")]
    MalformedConfig { path: String, message: String },

    #[error("Failed to save config file '{path}': {message}")]
    PersistenceError { path: String, message: String },
}

impl WeatherError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownKey { .. } => "CONFIG_UNKNOWN_KEY",
            ConfigError::TypeMismatch { .. } => "CONFIG_TYPE_MISMATCH",
            ConfigError::ConstraintViolation { .. } => "CONFIG_CONSTRAINT_VIOLATION",
            ConfigError::BadAssignment { .. } => "CONFIG_BAD_ASSIGNMENT",
            ConfigError::MalformedConfig { .. } => "CONFIG_MALFORMED",
            ConfigError::PersistenceError { .. } => "CONFIG_PERSISTENCE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        // Exhaustive match ensures new variants force an explicit classification.
        match self {
            ConfigError::UnknownKey { .. }
            | ConfigError::TypeMismatch { .. }
            | ConfigError::ConstraintViolation { .. }
            | ConfigError::BadAssignment { .. } => true,

            ConfigError::MalformedConfig { .. } | ConfigError::PersistenceError { .. } => false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No city given. Pass a city name or set one with --config default_city=<city>")]
    MissingCity,

    #[error("City not found: {city}")]
    CityNotFound { city: String },

    #[error("Weather service request failed: {message}")]
    RequestFailed { message: String },

    #[error("Unexpected response from weather service: {message}")]
    InvalidResponse { message: String },
}

impl WeatherError for LookupError {
    fn error_code(&self) -> &'static str {
        match self {
            LookupError::MissingCity => "LOOKUP_MISSING_CITY",
            LookupError::CityNotFound { .. } => "LOOKUP_CITY_NOT_FOUND",
            LookupError::RequestFailed { .. } => "LOOKUP_REQUEST_FAILED",
            LookupError::InvalidResponse { .. } => "LOOKUP_INVALID_RESPONSE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            LookupError::MissingCity | LookupError::CityNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_display() {
        let error = ConfigError::UnknownKey {
            key: "colour".to_string(),
            valid_keys: "default_city, default_format, forecast_days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown config key 'colour'. Valid keys: default_city, default_format, forecast_days"
        );
        assert_eq!(error.error_code(), "CONFIG_UNKNOWN_KEY");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_malformed_config_is_not_user_error() {
        let error = ConfigError::MalformedConfig {
            path: "/tmp/config.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert!(error.to_string().contains("/tmp/config.json"));
        assert!(error.to_string().contains("--config-reset"));
        assert_eq!(error.error_code(), "CONFIG_MALFORMED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_persistence_error_is_not_user_error() {
        let error = ConfigError::PersistenceError {
            path: "/tmp/config.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(error.error_code(), "CONFIG_PERSISTENCE_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_lookup_error_classification() {
        assert!(LookupError::MissingCity.is_user_error());
        assert!(
            LookupError::CityNotFound {
                city: "Atlantis".to_string()
            }
            .is_user_error()
        );
        let error = LookupError::RequestFailed {
            message: "timed out".to_string(),
        };
        assert_eq!(error.error_code(), "LOOKUP_REQUEST_FAILED");
        assert!(!error.is_user_error());
    }
}
