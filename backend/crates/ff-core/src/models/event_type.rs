use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    FeaturesImported,
    FeaturesExported,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeaturesImported => "features-imported",
            Self::FeaturesExported => "features-exported",
        }
    }
}

impl FromStr for EventType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "features-imported" => Ok(Self::FeaturesImported),
            "features-exported" => Ok(Self::FeaturesExported),
            _ => Err(CoreError::InvalidEventType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
