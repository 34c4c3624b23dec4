use crate::PermissionGrant;

use ff_core::{
    ContextField, FeatureDependency, FeatureEnvironment, FeatureLink, FeatureStrategy,
    FeatureStrategySegment, FeatureTag, FeatureToggle, ParentDependency, Segment,
    StrategyDefinition, TagType, TransferEvent,
};

use serde::{Deserialize, Serialize};

pub const BUILT_IN_STRATEGIES: &[&str] = &[
    "default",
    "userWithId",
    "applicationHostname",
    "gradualRolloutRandom",
    "gradualRolloutSessionId",
    "gradualRolloutUserId",
    "remoteAddress",
    "flexibleRollout",
];

/// Everything the destination holds. This is also the JSON state-file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryState {
    pub features: Vec<FeatureToggle>,
    pub feature_environments: Vec<FeatureEnvironment>,
    pub feature_strategies: Vec<FeatureStrategy>,
    pub strategies: Vec<StrategyDefinition>,
    pub context_fields: Vec<ContextField>,
    pub tag_types: Vec<TagType>,
    pub feature_tags: Vec<FeatureTag>,
    pub segments: Vec<Segment>,
    pub feature_strategy_segments: Vec<FeatureStrategySegment>,
    pub dependencies: Vec<FeatureDependency>,
    pub links: Vec<FeatureLink>,
    pub grants: Vec<PermissionGrant>,
    pub events: Vec<TransferEvent>,
}

impl MemoryState {
    /// Empty state whose strategy catalog holds the built-in strategies.
    pub fn with_built_in_strategies() -> Self {
        Self {
            strategies: BUILT_IN_STRATEGIES
                .iter()
                .map(|name| StrategyDefinition::built_in(name))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_feature(mut self, feature: FeatureToggle) -> Self {
        self.features.push(feature);
        self
    }

    pub fn with_feature_environment(mut self, row: FeatureEnvironment) -> Self {
        self.feature_environments.push(row);
        self
    }

    pub fn with_feature_strategy(mut self, strategy: FeatureStrategy) -> Self {
        self.feature_strategies.push(strategy);
        self
    }

    pub fn with_strategy_definition(mut self, definition: StrategyDefinition) -> Self {
        self.strategies.push(definition);
        self
    }

    pub fn with_context_field(mut self, field: ContextField) -> Self {
        self.context_fields.push(field);
        self
    }

    pub fn with_tag_type(mut self, tag_type: TagType) -> Self {
        self.tag_types.push(tag_type);
        self
    }

    pub fn with_feature_tag(mut self, tag: FeatureTag) -> Self {
        self.feature_tags.push(tag);
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn with_segment_link(mut self, feature_strategy_id: &str, segment_id: i64) -> Self {
        self.feature_strategy_segments.push(FeatureStrategySegment {
            feature_strategy_id: feature_strategy_id.to_string(),
            segment_id,
        });
        self
    }

    pub fn with_dependency(mut self, child: &str, parent: ParentDependency) -> Self {
        self.dependencies.push(FeatureDependency {
            child: child.to_string(),
            parent,
        });
        self
    }

    pub fn with_link(mut self, link: FeatureLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_grant(mut self, grant: PermissionGrant) -> Self {
        self.grants.push(grant);
        self
    }
}
