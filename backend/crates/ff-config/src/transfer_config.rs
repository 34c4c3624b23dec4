use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_MAX_FEATURES_PER_IMPORT: usize = 1;
pub const MAX_MAX_FEATURES_PER_IMPORT: usize = 10_000;
pub const DEFAULT_MAX_FEATURES_PER_IMPORT: usize = 1_000;

/// Limits applied to import payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Upper bound on distinct feature names in one import
    pub max_features_per_import: usize,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            max_features_per_import: DEFAULT_MAX_FEATURES_PER_IMPORT,
        }
    }
}

impl TransferConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_features_per_import < MIN_MAX_FEATURES_PER_IMPORT
            || self.max_features_per_import > MAX_MAX_FEATURES_PER_IMPORT
        {
            return Err(ConfigError::transfer(format!(
                "transfer.max_features_per_import must be {}-{}, got {}",
                MIN_MAX_FEATURES_PER_IMPORT,
                MAX_MAX_FEATURES_PER_IMPORT,
                self.max_features_per_import
            )));
        }

        Ok(())
    }
}
