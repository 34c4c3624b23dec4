use crate::{ConfigError, ConfigErrorResult, DEFAULT_STATE_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON state file, relative to the config directory
    pub state_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            state_file: String::from(DEFAULT_STATE_FILENAME),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.state_file.trim().is_empty() {
            return Err(ConfigError::store("store.state_file cannot be empty"));
        }

        let path = Path::new(&self.state_file);
        if path.is_absolute() || self.state_file.contains("..") {
            return Err(ConfigError::store(
                "store.state_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
