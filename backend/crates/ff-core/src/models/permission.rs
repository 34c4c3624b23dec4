use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Permissions an import may require, plus `Admin` which implies all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Admin,
    UpdateFeature,
    CreateFeature,
    CreateFeatureStrategy,
    DeleteFeatureStrategy,
    UpdateTagType,
    CreateContextField,
    UpdateFeatureEnvironmentVariants,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::UpdateFeature => "UPDATE_FEATURE",
            Self::CreateFeature => "CREATE_FEATURE",
            Self::CreateFeatureStrategy => "CREATE_FEATURE_STRATEGY",
            Self::DeleteFeatureStrategy => "DELETE_FEATURE_STRATEGY",
            Self::UpdateTagType => "UPDATE_TAG_TYPE",
            Self::CreateContextField => "CREATE_CONTEXT_FIELD",
            Self::UpdateFeatureEnvironmentVariants => "UPDATE_FEATURE_ENVIRONMENT_VARIANTS",
        }
    }

    /// Human readable name, used when listing missing permissions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::UpdateFeature => "Update feature toggles",
            Self::CreateFeature => "Create feature toggles",
            Self::CreateFeatureStrategy => "Create activation strategies",
            Self::DeleteFeatureStrategy => "Delete activation strategies",
            Self::UpdateTagType => "Update tag types",
            Self::CreateContextField => "Create context fields",
            Self::UpdateFeatureEnvironmentVariants => "Update variants",
        }
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "UPDATE_FEATURE" => Ok(Self::UpdateFeature),
            "CREATE_FEATURE" => Ok(Self::CreateFeature),
            "CREATE_FEATURE_STRATEGY" => Ok(Self::CreateFeatureStrategy),
            "DELETE_FEATURE_STRATEGY" => Ok(Self::DeleteFeatureStrategy),
            "UPDATE_TAG_TYPE" => Ok(Self::UpdateTagType),
            "CREATE_CONTEXT_FIELD" => Ok(Self::CreateContextField),
            "UPDATE_FEATURE_ENVIRONMENT_VARIANTS" => Ok(Self::UpdateFeatureEnvironmentVariants),
            _ => Err(CoreError::InvalidPermission {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
