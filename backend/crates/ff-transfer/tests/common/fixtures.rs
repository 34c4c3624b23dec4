use super::{ADMIN, ENVIRONMENT, PROJECT};

use ff_core::{
    Constraint, ContextField, FeatureEnvironment, FeatureEnvironmentSchema, FeatureSchema,
    FeatureStrategy, FeatureTag, FeatureToggle, ImportPayload, NewFeature, Segment,
    StrategySchema, TagType, TransferData, Variant,
};
use ff_store::{MemoryState, PermissionGrant};

use std::collections::BTreeMap;

/// Built-in strategies and an `admin` user holding every permission.
pub fn admin_state() -> MemoryState {
    MemoryState::with_built_in_strategies().with_grant(PermissionGrant::admin(ADMIN))
}

pub fn feature(name: &str, project: &str) -> FeatureToggle {
    FeatureToggle::new(
        project,
        NewFeature {
            name: name.to_string(),
            feature_type: "release".to_string(),
            description: Some(format!("{} description", name)),
            impression_data: false,
        },
    )
}

pub fn archived_feature(name: &str, project: &str) -> FeatureToggle {
    let mut feature = feature(name, project);
    feature.archived_at = Some(chrono::Utc::now());
    feature
}

pub fn stored_strategy(id: &str, feature: &str, environment: &str, name: &str) -> FeatureStrategy {
    FeatureStrategy {
        id: id.to_string(),
        feature_name: feature.to_string(),
        project_id: PROJECT.to_string(),
        environment: environment.to_string(),
        strategy_name: name.to_string(),
        title: None,
        disabled: false,
        constraints: Vec::new(),
        parameters: BTreeMap::new(),
        sort_order: 0,
        created_at: Some(chrono::Utc::now()),
    }
}

pub fn stored_environment(feature: &str, enabled: bool, variants: Vec<Variant>) -> FeatureEnvironment {
    FeatureEnvironment {
        feature_name: feature.to_string(),
        environment: ENVIRONMENT.to_string(),
        enabled,
        variants,
        last_seen_at: None,
    }
}

pub fn segment(id: i64, name: &str) -> Segment {
    Segment {
        id,
        name: name.to_string(),
        description: None,
        constraints: vec![Constraint::new("region", "IN", &["eu"])],
        project: None,
        created_at: None,
    }
}

pub fn flexible_rollout(feature: &str) -> StrategySchema {
    let mut strategy = StrategySchema::new("flexibleRollout", feature);
    strategy
        .parameters
        .insert("rollout".to_string(), "50".to_string());
    strategy
        .parameters
        .insert("stickiness".to_string(), "default".to_string());
    strategy
}

pub fn environment(feature: &str, enabled: bool) -> FeatureEnvironmentSchema {
    FeatureEnvironmentSchema {
        feature_name: feature.to_string(),
        enabled,
        variants: Vec::new(),
    }
}

pub fn environment_with_variants(feature: &str, variants: Vec<Variant>) -> FeatureEnvironmentSchema {
    FeatureEnvironmentSchema {
        feature_name: feature.to_string(),
        enabled: true,
        variants,
    }
}

pub fn tag(feature: &str, tag_type: &str, value: &str) -> FeatureTag {
    FeatureTag::new(feature, tag_type, value)
}

pub fn tag_type(name: &str) -> TagType {
    TagType::new(name)
}

pub fn context_field(name: &str, legal_values: &[&str]) -> ContextField {
    ContextField::new(name, legal_values)
}

/// Payload for the default project/environment holding only `features`.
pub fn payload(features: &[&str]) -> ImportPayload {
    payload_with(TransferData {
        features: features.iter().map(|n| FeatureSchema::new(n)).collect(),
        ..TransferData::default()
    })
}

pub fn payload_with(data: TransferData) -> ImportPayload {
    ImportPayload::new(PROJECT, ENVIRONMENT, data)
}

/// One feature with one strategy, enabled, tagged and carrying a variant.
pub fn full_payload(name: &str) -> ImportPayload {
    payload_with(TransferData {
        features: vec![FeatureSchema::new(name)],
        feature_strategies: vec![flexible_rollout(name)],
        feature_environments: vec![environment(name, true)],
        feature_tags: vec![tag(name, "team", "payments")],
        tag_types: vec![tag_type("team")],
        ..TransferData::default()
    })
}

pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
