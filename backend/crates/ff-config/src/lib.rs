mod config;
mod error;
mod log_level;
mod logging_config;
mod store_config;
mod transfer_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;
pub use transfer_config::{
    DEFAULT_MAX_FEATURES_PER_IMPORT, MAX_MAX_FEATURES_PER_IMPORT, MIN_MAX_FEATURES_PER_IMPORT,
    TransferConfig,
};

pub const CONFIG_DIR_ENV: &str = "FF_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CONFIG_DIR: &str = ".ff";
const DEFAULT_STATE_FILENAME: &str = "state.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
