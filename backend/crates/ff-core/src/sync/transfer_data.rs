use crate::{
    ContextField, FeatureDependencies, FeatureEnvironmentSchema, FeatureLinks, FeatureSchema,
    FeatureTag, SegmentRef, StrategySchema, TagType,
};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Portable feature configuration for one environment.
///
/// Serves both as the `data` half of an import payload and as the result of
/// an export. Every collection defaults to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferData {
    #[serde(default)]
    pub features: Vec<FeatureSchema>,

    #[serde(default)]
    pub feature_strategies: Vec<StrategySchema>,

    #[serde(default)]
    pub feature_environments: Vec<FeatureEnvironmentSchema>,

    /// Only fields referenced by a strategy or variant
    #[serde(default)]
    pub context_fields: Vec<ContextField>,

    #[serde(default)]
    pub feature_tags: Vec<FeatureTag>,

    /// Segments referenced by exported strategies. Ignored on import.
    #[serde(default)]
    pub segments: Vec<SegmentRef>,

    #[serde(default)]
    pub tag_types: Vec<TagType>,

    /// Parents of exported features, grouped by child
    #[serde(default)]
    pub dependencies: Vec<FeatureDependencies>,

    #[serde(default)]
    pub links: Vec<FeatureLinks>,
}

pub type ExportSnapshot = TransferData;

impl TransferData {
    /// Feature names in payload order, duplicates included.
    pub fn feature_names(&self) -> Vec<String> {
        self.features.iter().map(|f| f.name.clone()).collect()
    }

    pub fn distinct_feature_names(&self) -> BTreeSet<String> {
        self.features.iter().map(|f| f.name.clone()).collect()
    }

    /// Parent names referenced by `dependencies`, first occurrence only.
    pub fn parent_feature_names(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.dependencies
            .iter()
            .flat_map(|d| d.dependencies.iter())
            .filter(|parent| seen.insert(parent.feature.as_str()))
            .map(|parent| parent.feature.clone())
            .collect()
    }
}
