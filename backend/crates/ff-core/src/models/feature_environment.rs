use crate::Variant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-environment state of a feature as held by the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureEnvironment {
    pub feature_name: String,
    pub environment: String,
    pub enabled: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
}

/// Portable per-environment entry of a transfer document. The environment
/// itself is implied by the surrounding payload or export query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureEnvironmentSchema {
    pub feature_name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl FeatureEnvironmentSchema {
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

impl From<&FeatureEnvironment> for FeatureEnvironmentSchema {
    fn from(row: &FeatureEnvironment) -> Self {
        Self {
            feature_name: row.feature_name.clone(),
            enabled: row.enabled,
            variants: row.variants.clone(),
        }
    }
}
