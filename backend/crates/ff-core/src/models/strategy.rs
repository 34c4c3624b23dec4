use crate::Constraint;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameter key holding a strategy's stickiness context field.
pub const STICKINESS_PARAMETER: &str = "stickiness";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// A strategy type known to the destination's catalog.
///
/// `editable` marks user-defined strategies; built-in ones are not editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDefinition {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub parameters: Vec<StrategyParameter>,
}

impl StrategyDefinition {
    pub fn built_in(name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: None,
            description: None,
            editable: false,
            deprecated: false,
            parameters: Vec::new(),
        }
    }

    pub fn custom(name: &str) -> Self {
        Self {
            editable: true,
            ..Self::built_in(name)
        }
    }
}

/// Strategy instance attached to a feature in one environment, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStrategy {
    pub id: String,
    pub feature_name: String,
    pub project_id: String,
    pub environment: String,
    pub strategy_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl FeatureStrategy {
    /// True when the stickiness parameter or any constraint names `field`.
    pub fn references_context_field(&self, field: &str) -> bool {
        self.parameters.get(STICKINESS_PARAMETER).map(String::as_str) == Some(field)
            || self.constraints.iter().any(|c| c.context_name == field)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStrategy {
    pub feature_name: String,
    pub strategy_name: String,
    pub title: Option<String>,
    pub disabled: bool,
    pub constraints: Vec<Constraint>,
    pub parameters: BTreeMap<String, String>,
    pub sort_order: i32,
}

/// Portable strategy entry of a transfer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub segments: Vec<i64>,
}

impl StrategySchema {
    pub fn new(name: &str, feature_name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            feature_name: Some(feature_name.to_string()),
            title: None,
            disabled: false,
            constraints: Vec::new(),
            parameters: BTreeMap::new(),
            sort_order: 0,
            segments: Vec::new(),
        }
    }

    /// Renames the stored `strategyName` to `name` and drops the
    /// project/environment join keys and timestamps.
    pub fn from_stored(strategy: &FeatureStrategy, segments: Vec<i64>) -> Self {
        Self {
            id: Some(strategy.id.clone()),
            name: strategy.strategy_name.clone(),
            feature_name: Some(strategy.feature_name.clone()),
            title: strategy.title.clone(),
            disabled: strategy.disabled,
            constraints: strategy.constraints.clone(),
            parameters: strategy.parameters.clone(),
            sort_order: strategy.sort_order,
            segments,
        }
    }

    /// `None` when the entry is not attached to any feature.
    pub fn to_new_strategy(&self) -> Option<NewStrategy> {
        let feature_name = self.feature_name.clone()?;
        Some(NewStrategy {
            feature_name,
            strategy_name: self.name.clone(),
            title: self.title.clone(),
            disabled: self.disabled,
            constraints: self.constraints.clone(),
            parameters: self.parameters.clone(),
            sort_order: self.sort_order,
        })
    }
}
