mod common;

use common::fixtures::*;
use common::{ENVIRONMENT, Harness, PROJECT, admin};

use ff_core::{
    Constraint, EventType, ExportQuery, FeatureLink, FeatureStrategy, ParentDependency,
    SegmentRef, StrategySchema, Variant,
};
use ff_store::MemoryState;

use googletest::prelude::*;

fn with_region_constraint(mut strategy: FeatureStrategy) -> FeatureStrategy {
    strategy.constraints = vec![Constraint::new("region", "IN", &["eu"])];
    strategy
}

/// `checkout` and `search` in the default project, each with one production
/// strategy; `checkout` is tagged `team:payments`.
fn source_state() -> MemoryState {
    admin_state()
        .with_feature(feature("checkout", PROJECT))
        .with_feature(feature("search", PROJECT))
        .with_feature_environment(stored_environment("checkout", true, Vec::new()))
        .with_feature_environment(stored_environment("search", false, Vec::new()))
        .with_feature_strategy(with_region_constraint(stored_strategy(
            "s-checkout",
            "checkout",
            ENVIRONMENT,
            "default",
        )))
        .with_feature_strategy(stored_strategy("s-search", "search", ENVIRONMENT, "default"))
        .with_feature_strategy(stored_strategy("s-dev", "checkout", "development", "default"))
        .with_context_field(context_field("region", &["eu", "us"]))
        .with_context_field(context_field("tenant", &["acme"]))
        .with_tag_type(tag_type("team"))
        .with_tag_type(tag_type("unused"))
        .with_feature_tag(tag("checkout", "team", "payments"))
        .with_segment(segment(1, "beta-users"))
        .with_segment(segment(2, "internal"))
        .with_segment_link("s-checkout", 1)
}

// =========================================================================
// Selection
// =========================================================================

#[tokio::test]
async fn given_feature_list_when_export_then_only_those_features_exported() {
    // Given
    let harness = Harness::new(source_state());

    // When
    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["search"]), &admin())
        .await
        .unwrap();

    // Then
    assert_that!(snapshot.features.len(), eq(1));
    assert_that!(snapshot.features[0].name.as_str(), eq("search"));
    assert_that!(snapshot.feature_strategies.len(), eq(1));
    assert_that!(snapshot.feature_environments.len(), eq(1));
    assert_that!(snapshot.feature_tags, is_empty());
    assert_that!(snapshot.tag_types, is_empty());
    assert_that!(snapshot.segments, is_empty());
}

#[tokio::test]
async fn given_tag_and_feature_list_when_export_then_tag_wins() {
    // Given
    let harness = Harness::new(source_state());
    let mut query = ExportQuery::for_tag(ENVIRONMENT, "payments");
    query.features = Some(vec!["search".to_string()]);

    // When
    let snapshot = harness.service.export(&query, &admin()).await.unwrap();

    // Then
    let exported: Vec<&str> = snapshot.features.iter().map(|f| f.name.as_str()).collect();
    assert_that!(exported, elements_are![eq(&"checkout")]);
}

#[tokio::test]
async fn given_no_scope_when_export_then_bad_data() {
    let harness = Harness::new(source_state());
    let query = ExportQuery {
        environment: ENVIRONMENT.to_string(),
        ..ExportQuery::default()
    };

    let result = harness.service.export(&query, &admin()).await;

    assert!(result.is_err_and(|e| e.is_bad_data()));
    assert_that!(harness.backend.events().await, is_empty());
}

#[tokio::test]
async fn given_unknown_tag_when_export_then_empty_snapshot() {
    let harness = Harness::new(source_state());

    let snapshot = harness
        .service
        .export(&ExportQuery::for_tag(ENVIRONMENT, "nobody"), &admin())
        .await
        .unwrap();

    assert_that!(snapshot.features, is_empty());
    assert_that!(snapshot.feature_strategies, is_empty());
}

// =========================================================================
// Minimality
// =========================================================================

#[tokio::test]
async fn given_constraint_on_region_when_export_then_only_region_context_field_exported() {
    // Given
    let harness = Harness::new(source_state());

    // When
    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout"]), &admin())
        .await
        .unwrap();

    // Then
    assert_that!(snapshot.context_fields.len(), eq(1));
    assert_that!(snapshot.context_fields[0].name.as_str(), eq("region"));
    assert_that!(snapshot.context_fields[0].created_at, none());
}

#[tokio::test]
async fn given_variant_stickiness_when_export_then_referenced_field_exported() {
    // Given
    let mut variant = Variant::new("blue", 1000);
    variant.stickiness = Some("tenant".to_string());
    let state = admin_state()
        .with_feature(feature("search", PROJECT))
        .with_feature_environment(stored_environment("search", true, vec![variant]))
        .with_context_field(context_field("tenant", &["acme"]))
        .with_context_field(context_field("region", &["eu"]));
    let harness = Harness::new(state);

    // When
    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["search"]), &admin())
        .await
        .unwrap();

    // Then
    let fields: Vec<&str> = snapshot
        .context_fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_that!(fields, elements_are![eq(&"tenant")]);
}

#[tokio::test]
async fn given_linked_segment_when_export_then_segment_ids_joined_and_referenced_segments_only() {
    // Given
    let harness = Harness::new(source_state());

    // When
    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout"]), &admin())
        .await
        .unwrap();

    // Then
    assert_that!(snapshot.feature_strategies.len(), eq(1));
    assert_that!(snapshot.feature_strategies[0].segments, elements_are![eq(&1)]);
    assert_that!(
        snapshot.segments,
        elements_are![eq(&SegmentRef {
            id: 1,
            name: "beta-users".to_string(),
        })]
    );
}

#[tokio::test]
async fn given_tagged_feature_when_export_then_only_used_tag_types_exported() {
    let harness = Harness::new(source_state());

    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout", "search"]), &admin())
        .await
        .unwrap();

    let tag_types: Vec<&str> = snapshot.tag_types.iter().map(|t| t.name.as_str()).collect();
    assert_that!(tag_types, elements_are![eq(&"team")]);
}

#[tokio::test]
async fn given_strategies_in_other_environment_when_export_then_excluded() {
    let harness = Harness::new(source_state());

    let snapshot = harness
        .service
        .export(&ExportQuery::for_features("development", &["checkout"]), &admin())
        .await
        .unwrap();

    assert_that!(snapshot.feature_strategies.len(), eq(1));
    assert_that!(
        snapshot.feature_strategies[0].id.as_deref(),
        some(eq("s-dev"))
    );
    assert_that!(snapshot.feature_environments, is_empty());
}

#[tokio::test]
async fn given_dependencies_and_links_when_export_then_grouped_by_selected_feature() {
    // Given
    let harness = Harness::new(
        source_state()
            .with_feature(feature("payments", PROJECT))
            .with_dependency("checkout", ParentDependency::new("search"))
            .with_dependency("checkout", ParentDependency::new("payments"))
            .with_dependency("payments", ParentDependency::new("search"))
            .with_link(FeatureLink {
                id: "7".to_string(),
                feature_name: "checkout".to_string(),
                url: "https://example.com/runbook".to_string(),
                title: Some("Runbook".to_string()),
            }),
    );

    // When
    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout", "search"]), &admin())
        .await
        .unwrap();

    // Then
    assert_that!(snapshot.dependencies.len(), eq(1));
    assert_that!(snapshot.dependencies[0].feature.as_str(), eq("checkout"));
    let parents: Vec<&str> = snapshot.dependencies[0]
        .dependencies
        .iter()
        .map(|p| p.feature.as_str())
        .collect();
    assert_that!(parents, elements_are![eq(&"search"), eq(&"payments")]);
    assert_that!(snapshot.links.len(), eq(1));
    assert_that!(snapshot.links[0].links[0].id.as_deref(), some(eq("7")));
}

// =========================================================================
// Wire format
// =========================================================================

#[tokio::test]
async fn given_exported_snapshot_when_serialized_then_bookkeeping_stripped() {
    // Given
    let harness = Harness::new(source_state());

    // When
    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout"]), &admin())
        .await
        .unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    // Then
    let strategy = &json["featureStrategies"][0];
    assert_that!(strategy["name"].as_str(), some(eq("default")));
    assert_that!(strategy["featureName"].as_str(), some(eq("checkout")));
    assert!(strategy.get("strategyName").is_none());
    assert!(strategy.get("environment").is_none());
    assert!(strategy.get("projectId").is_none());
    assert!(strategy.get("createdAt").is_none());

    let environment = &json["featureEnvironments"][0];
    assert!(environment.get("environment").is_none());
    assert!(environment.get("lastSeenAt").is_none());

    let feature = &json["features"][0];
    assert!(feature.get("createdAt").is_none());
    assert!(feature.get("lastSeenAt").is_none());
    assert!(json["contextFields"][0].get("createdAt").is_none());
}

// =========================================================================
// Audit and round trip
// =========================================================================

#[tokio::test]
async fn given_export_when_done_then_event_carries_snapshot() {
    // Given
    let harness = Harness::new(source_state());

    // When
    let snapshot = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout"]), &admin())
        .await
        .unwrap();

    // Then
    let events = harness.backend.events().await;
    assert_that!(events.len(), eq(1));
    assert_that!(events[0].event_type, eq(EventType::FeaturesExported));
    assert_that!(events[0].created_by.as_str(), eq("admin"));
    assert_that!(
        events[0].data,
        some(eq(&serde_json::to_value(&snapshot).unwrap()))
    );
}

#[tokio::test]
async fn given_failing_event_sink_when_export_then_snapshot_still_returned() {
    let harness = Harness::with_failing_events(source_state());

    let result = harness
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout"]), &admin())
        .await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_exported_snapshot_when_imported_elsewhere_then_configuration_reproduced() {
    // Given
    let source = Harness::new(source_state());
    let snapshot = source
        .service
        .export(&ExportQuery::for_features(ENVIRONMENT, &["checkout", "search"]), &admin())
        .await
        .unwrap();
    let destination = Harness::new(admin_state());

    // When
    let result = destination
        .service
        .import(&payload_with(snapshot.clone()), &admin())
        .await;

    // Then
    assert_that!(result, ok(anything()));
    let state = destination.state().await;
    assert_that!(state.features.len(), eq(2));
    assert_that!(state.feature_tags.len(), eq(1));
    assert_that!(state.context_fields.len(), eq(1));
    let mut imported: Vec<StrategySchema> = state
        .feature_strategies
        .iter()
        .map(|s| StrategySchema {
            id: None,
            ..StrategySchema::from_stored(s, Vec::new())
        })
        .collect();
    let mut exported: Vec<StrategySchema> = snapshot
        .feature_strategies
        .iter()
        .map(|s| StrategySchema {
            id: None,
            segments: Vec::new(),
            ..s.clone()
        })
        .collect();
    imported.sort_by(|a, b| a.feature_name.cmp(&b.feature_name));
    exported.sort_by(|a, b| a.feature_name.cmp(&b.feature_name));
    assert_that!(imported, eq(&exported));
    assert_that!(state.feature_strategy_segments, is_empty());
}
