use ff_store::StoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    /// The payload conflicts with the destination; nothing was written.
    #[error("Bad data: {message} {location}")]
    BadData {
        message: String,
        items: Vec<String>,
        location: ErrorLocation,
    },

    /// The acting user lacks permissions; carries their display names.
    #[error("Invalid operation: {message} {location}")]
    InvalidOperation {
        message: String,
        missing: Vec<String>,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error reading {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl TransferError {
    /// Message is rendered as `"<prefix>: a, b, c"`, or just the prefix
    /// when there are no items.
    #[track_caller]
    pub fn bad_data(prefix: &str, items: Vec<String>) -> Self {
        let message = if items.is_empty() {
            prefix.to_string()
        } else {
            format!("{}: {}", prefix, items.join(", "))
        };
        Self::BadData {
            message,
            items,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_operation(message: impl Into<String>, missing: Vec<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
            missing,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_bad_data(&self) -> bool {
        matches!(self, Self::BadData { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}

impl From<serde_json::Error> for TransferError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;
