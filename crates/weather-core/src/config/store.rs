use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::types::Configuration;
use crate::errors::ConfigError;

/// Environment variable that overrides the config file location.
pub const CONFIG_FILE_ENV: &str = "WEATHER_CLI_CONFIG_FILE";

/// On-disk home of the configuration, normally `~/.weather-cli/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, honouring `WEATHER_CLI_CONFIG_FILE`.
    pub fn from_env() -> Self {
        Self::new(config_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, seeding the file with defaults on first use.
    ///
    /// A file that exists but cannot be parsed is an error. A file that exists
    /// but cannot be read yields the default set and is left untouched.
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    event = "core.config.seeding_defaults",
                    path = %self.path.display()
                );
                let defaults = Configuration::defaults();
                if let Err(e) = self.save(&defaults) {
                    tracing::warn!(
                        event = "core.config.seed_failed",
                        path = %self.path.display(),
                        error = %e,
                        "Could not create config file, continuing with defaults"
                    );
                }
                return Ok(defaults);
            }
            Err(e) => {
                // WARN (not error): an unreadable file should not block a
                // weather lookup; defaults are a safe degradation.
                tracing::warn!(
                    event = "core.config.read_failed",
                    path = %self.path.display(),
                    error = %e,
                    "Config file exists but cannot be read, using defaults"
                );
                return Ok(Configuration::defaults());
            }
        };

        let config = parse_document(&content).map_err(|message| {
            // ERROR (not warn): file exists but is corrupted, requires user action.
            tracing::error!(
                event = "core.config.parse_failed",
                path = %self.path.display(),
                error = %message
            );
            ConfigError::MalformedConfig {
                path: self.path.display().to_string(),
                message,
            }
        })?;

        tracing::debug!(
            event = "core.config.loaded",
            path = %self.path.display(),
            extra_keys = config.extra().len()
        );

        Ok(config)
    }

    /// Write the configuration, creating the parent directory if needed.
    pub fn save(&self, config: &Configuration) -> Result<(), ConfigError> {
        let path_str = self.path.display().to_string();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::PersistenceError {
                path: path_str.clone(),
                message: format!("Failed to create directory ({}): {}", parent.display(), e),
            })?;
        }

        let json = serde_json::to_string_pretty(&config.to_json()).map_err(|e| {
            ConfigError::PersistenceError {
                path: path_str.clone(),
                message: format!("Failed to serialize config: {}", e),
            }
        })?;

        std::fs::write(&self.path, json).map_err(|e| {
            tracing::error!(
                event = "core.config.save_failed",
                path = %self.path.display(),
                error = %e
            );
            ConfigError::PersistenceError {
                path: path_str,
                message: e.to_string(),
            }
        })?;

        tracing::info!(event = "core.config.saved", path = %self.path.display());

        Ok(())
    }
}

/// Parse file content into a configuration overlaid on the defaults.
fn parse_document(content: &str) -> Result<Configuration, String> {
    let document: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    match document {
        serde_json::Value::Object(map) => Configuration::overlay(map),
        other => Err(format!("expected a JSON object, found {}", json_kind(&other))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn config_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var(CONFIG_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".weather-cli").join("config.json"),
        None => {
            tracing::error!(
                event = "core.config.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".weather-cli").join("config.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::SettingValue;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join(".weather-cli").join("config.json"))
    }

    #[test]
    fn test_load_missing_file_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let config = store.load().unwrap();
        assert_eq!(config, Configuration::defaults());
        assert!(store.path().exists(), "load should create the file");

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, Configuration::defaults());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut config = Configuration::defaults();
        config.insert("default_city", SettingValue::Text("北京".to_string()));
        config.insert("default_format", SettingValue::Text("json".to_string()));
        config.insert("forecast_days", SettingValue::Integer(7));

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_saved_file_is_indented_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut config = Configuration::defaults();
        config.insert("default_city", SettingValue::Text("北京".to_string()));
        store.save(&config).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\n  \"default_city\": \"北京\""));
        assert!(content.contains("\"forecast_days\": 3"));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"forecast_days": 6}"#).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.forecast_days(), 6);
        assert_eq!(config.default_city(), None);
        assert_eq!(config.get("default_format"), Some(&SettingValue::Text("text".into())));
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"units": {"temp": "C"}, "default_city": "Oslo"}"#)
            .unwrap();

        let config = store.load().unwrap();
        store.save(&config).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["units"], json!({"temp": "C"}));
        assert_eq!(raw["default_city"], json!("Oslo"));
        assert_eq!(raw["forecast_days"], json!(3));
    }

    #[test]
    fn test_load_corrupted_json_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ this is not valid json }").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ConfigError::MalformedConfig { .. }));

        // The corrupted file must not be overwritten
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{ this is not valid json }");
    }

    #[test]
    fn test_load_non_object_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "[1, 2, 3]").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, found an array"));
    }

    #[test]
    fn test_load_wrong_typed_value_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"forecast_days": "three"}"#).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ConfigError::MalformedConfig { .. }));
        assert!(err.to_string().contains("forecast_days"));
    }

    #[test]
    fn test_load_out_of_range_value_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"default_city": "Oslo", "forecast_days": 10}"#).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.default_city(), Some("Oslo"));
        assert_eq!(config.get("forecast_days"), Some(&SettingValue::Integer(10)));
        assert_eq!(config.forecast_days(), 7);
    }

    #[test]
    fn test_load_unreadable_path_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the config path exists but cannot be read as a file.
        let path = temp_dir.path().join("config.json");
        std::fs::create_dir_all(&path).unwrap();
        let store = ConfigStore::new(&path);

        let config = store.load().unwrap();
        assert_eq!(config, Configuration::defaults());
        assert!(path.is_dir(), "unreadable path must not be modified");
    }

    #[cfg(unix)]
    #[test]
    fn test_load_permission_denied_returns_defaults() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), r#"{"default_city": "Lima"}"#).unwrap();
        std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass file permissions; nothing to test then.
        if std::fs::read_to_string(store.path()).is_ok() {
            return;
        }

        let config = store.load().unwrap();
        assert_eq!(config, Configuration::defaults());

        std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, r#"{"default_city": "Lima"}"#);
    }

    #[test]
    fn test_save_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = ConfigStore::new(blocker.join("config.json"));

        let err = store.save(&Configuration::defaults()).unwrap_err();
        assert!(matches!(err, ConfigError::PersistenceError { .. }));
    }

    #[test]
    fn test_load_under_file_parent_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = ConfigStore::new(blocker.join("config.json"));

        assert_eq!(store.load().unwrap(), Configuration::defaults());
    }
}
