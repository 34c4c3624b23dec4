use crate::{
    DEFAULT_FEATURE_TYPE, FEATURE_NAME_MAX_LENGTH, FeatureSchema, FeatureToggle, NewFeature,
    validate_feature_name,
};

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_url_safe_name_when_validated_then_ok() {
    assert_that!(validate_feature_name("checkout.new-flow_v2~beta"), ok(anything()));
}

#[test]
fn given_empty_name_when_validated_then_error() {
    assert_that!(validate_feature_name(""), err(anything()));
}

#[test]
fn given_name_with_spaces_when_validated_then_error() {
    assert_that!(validate_feature_name("new checkout"), err(anything()));
}

#[test]
fn given_dot_segment_name_when_validated_then_error() {
    assert_that!(validate_feature_name(".."), err(anything()));
}

#[test]
fn given_name_over_max_length_when_validated_then_error() {
    let name = "a".repeat(FEATURE_NAME_MAX_LENGTH + 1);

    assert_that!(validate_feature_name(&name), err(anything()));
}

#[test]
fn given_schema_without_type_when_converted_then_uses_default_type() {
    let mut schema = FeatureSchema::new("checkout");
    schema.created_at = Some(Utc::now());
    schema.archived_at = Some(Utc::now());
    schema.project = Some("source".to_string());

    let new_feature = schema.to_new_feature();

    assert_that!(
        new_feature,
        eq(&NewFeature {
            name: "checkout".to_string(),
            feature_type: DEFAULT_FEATURE_TYPE.to_string(),
            description: None,
            impression_data: false,
        })
    );
}

#[test]
fn given_stored_feature_when_converted_to_schema_then_timestamps_are_stripped() {
    let mut feature = FeatureToggle::new(
        "default",
        NewFeature {
            name: "checkout".to_string(),
            feature_type: "experiment".to_string(),
            description: Some("New checkout".to_string()),
            impression_data: true,
        },
    );
    feature.archived_at = Some(Utc::now());
    feature.last_seen_at = Some(Utc::now());

    let schema = FeatureSchema::from(&feature);

    assert_that!(schema.created_at, none());
    assert_that!(schema.archived_at, none());
    assert_that!(schema.feature_type.as_deref(), some(eq("experiment")));
    assert_that!(schema.project.as_deref(), some(eq("default")));
    assert_that!(schema.impression_data, eq(true));
}
