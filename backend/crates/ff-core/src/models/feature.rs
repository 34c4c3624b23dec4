use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEATURE_TYPE: &str = "release";
pub const FEATURE_NAME_MAX_LENGTH: usize = 100;

/// Feature record held by the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggle {
    pub name: String,
    pub project: String,
    #[serde(rename = "type", default = "default_feature_type")]
    pub feature_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub impression_data: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl FeatureToggle {
    pub fn new(project: &str, feature: NewFeature) -> Self {
        Self {
            name: feature.name,
            project: project.to_string(),
            feature_type: feature.feature_type,
            description: feature.description,
            impression_data: feature.impression_data,
            created_at: Utc::now(),
            archived_at: None,
            last_seen_at: None,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

/// Fields accepted when creating a feature. Timestamps are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeature {
    pub name: String,
    pub feature_type: String,
    pub description: Option<String>,
    pub impression_data: bool,
}

/// Portable feature entry of a transfer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSchema {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub impression_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
}

impl FeatureSchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            feature_type: None,
            description: None,
            impression_data: false,
            project: None,
            created_at: None,
            archived_at: None,
        }
    }

    /// Drops the source bookkeeping (project, timestamps) and keeps what a create needs.
    pub fn to_new_feature(&self) -> NewFeature {
        NewFeature {
            name: self.name.clone(),
            feature_type: self
                .feature_type
                .clone()
                .unwrap_or_else(default_feature_type),
            description: self.description.clone(),
            impression_data: self.impression_data,
        }
    }
}

impl From<&FeatureToggle> for FeatureSchema {
    fn from(feature: &FeatureToggle) -> Self {
        Self {
            name: feature.name.clone(),
            feature_type: Some(feature.feature_type.clone()),
            description: feature.description.clone(),
            impression_data: feature.impression_data,
            project: Some(feature.project.clone()),
            created_at: None,
            archived_at: None,
        }
    }
}

/// A name is well-formed when it is non-empty, at most `FEATURE_NAME_MAX_LENGTH`
/// characters and URL-safe (`A-Z a-z 0-9 - . _ ~`).
#[track_caller]
pub fn validate_feature_name(name: &str) -> CoreResult<()> {
    if name.is_empty() || name.chars().count() > FEATURE_NAME_MAX_LENGTH {
        return Err(CoreError::Validation {
            message: format!(
                "Feature name must be 1-{} characters, got {}",
                FEATURE_NAME_MAX_LENGTH,
                name.chars().count()
            ),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let url_safe = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'));
    if !url_safe || name == "." || name == ".." {
        return Err(CoreError::Validation {
            message: format!("Feature name is not URL-friendly: {}", name),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

fn default_feature_type() -> String {
    String::from(DEFAULT_FEATURE_TYPE)
}
