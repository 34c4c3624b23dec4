use crate::{Constraint, FeatureStrategy, STICKINESS_PARAMETER, StrategySchema};

use std::collections::BTreeMap;

use chrono::Utc;

fn stored_strategy() -> FeatureStrategy {
    FeatureStrategy {
        id: "strategy-1".to_string(),
        feature_name: "checkout".to_string(),
        project_id: "default".to_string(),
        environment: "production".to_string(),
        strategy_name: "flexibleRollout".to_string(),
        title: Some("Half".to_string()),
        disabled: false,
        constraints: vec![Constraint::new("region", "IN", &["eu"])],
        parameters: BTreeMap::from([
            ("rollout".to_string(), "50".to_string()),
            (STICKINESS_PARAMETER.to_string(), "userId".to_string()),
        ]),
        sort_order: 2,
        created_at: Some(Utc::now()),
    }
}

#[test]
fn test_from_stored_renames_strategy_name_and_keeps_segments() {
    let schema = StrategySchema::from_stored(&stored_strategy(), vec![7]);

    assert_eq!(schema.name, "flexibleRollout");
    assert_eq!(schema.feature_name.as_deref(), Some("checkout"));
    assert_eq!(schema.sort_order, 2);
    assert_eq!(schema.segments, vec![7]);
}

#[test]
fn test_to_new_strategy_requires_feature_name() {
    let mut schema = StrategySchema::new("default", "checkout");
    assert!(schema.to_new_strategy().is_some());

    schema.feature_name = None;
    assert!(schema.to_new_strategy().is_none());
}

#[test]
fn test_references_context_field_via_stickiness_and_constraints() {
    let strategy = stored_strategy();

    assert!(strategy.references_context_field("userId"));
    assert!(strategy.references_context_field("region"));
    assert!(!strategy.references_context_field("appName"));
}
