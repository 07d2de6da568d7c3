//! Get/set/reset/show over the persisted configuration.
//!
//! Every operation is a complete load-validate-mutate-persist round trip;
//! nothing is cached between calls, so edits made to the file by hand
//! between invocations are picked up (last writer wins).

use crate::config::display::render_configuration;
use crate::config::schema;
use crate::config::store::ConfigStore;
use crate::config::types::{Configuration, SettingValue};
use crate::errors::ConfigError;

#[derive(Debug, Clone)]
pub struct ConfigAccessor {
    store: ConfigStore,
}

impl ConfigAccessor {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Load the full configuration.
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        self.store.load()
    }

    /// Current value of `key`, or `fallback` when `key` is not a recognised setting.
    pub fn get(&self, key: &str, fallback: SettingValue) -> Result<SettingValue, ConfigError> {
        let config = self.store.load()?;
        Ok(config.get(key).cloned().unwrap_or(fallback))
    }

    /// Validate `raw` for `key`, persist it, and return the coerced value.
    ///
    /// Validation happens before the file is touched, so a rejected value
    /// leaves the stored configuration unchanged.
    pub fn set(&self, key: &str, raw: &str) -> Result<SettingValue, ConfigError> {
        let spec = schema::lookup_setting(key).ok_or_else(|| ConfigError::UnknownKey {
            key: key.to_string(),
            valid_keys: schema::valid_keys(),
        })?;

        let value = spec.parse(raw)?;

        let mut config = self.store.load()?;
        config.insert(spec.key, value.clone());
        self.store.save(&config)?;

        tracing::info!(
            event = "core.config.set_completed",
            key = spec.key,
            value = %value
        );

        Ok(value)
    }

    /// Overwrite the file with the default set, discarding every stored value.
    pub fn reset(&self) -> Result<Configuration, ConfigError> {
        let defaults = Configuration::defaults();
        self.store.save(&defaults)?;

        tracing::info!(event = "core.config.reset_completed");

        Ok(defaults)
    }

    /// Current configuration rendered as text, headed by the file path.
    pub fn show(&self) -> Result<String, ConfigError> {
        let config = self.store.load()?;
        Ok(render_configuration(self.store.path(), &config))
    }
}
