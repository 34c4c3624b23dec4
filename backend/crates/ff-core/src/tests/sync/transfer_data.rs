use crate::{ImportPayload, TransferData};

#[test]
fn test_missing_collections_default_to_empty() {
    let data: TransferData =
        serde_json::from_str(r#"{"features":[{"name":"checkout"}]}"#).unwrap();

    assert_eq!(data.features.len(), 1);
    assert!(data.feature_strategies.is_empty());
    assert!(data.feature_environments.is_empty());
    assert!(data.context_fields.is_empty());
    assert!(data.tag_types.is_empty());
    assert!(data.dependencies.is_empty());
    assert!(data.links.is_empty());
}

#[test]
fn test_payload_reads_camel_case_fields() {
    let payload: ImportPayload = serde_json::from_str(
        r#"{
            "project": "default",
            "environment": "production",
            "data": {
                "features": [{"name": "checkout", "type": "release", "impressionData": true}],
                "featureStrategies": [{"name": "default", "featureName": "checkout", "sortOrder": 1}],
                "featureEnvironments": [{"featureName": "checkout", "enabled": true,
                    "variants": [{"name": "blue", "weight": 1000, "weightType": "variable"}]}],
                "featureTags": [{"featureName": "checkout", "tagType": "simple", "tagValue": "payments"}]
            }
        }"#,
    )
    .unwrap();

    assert!(payload.data.features[0].impression_data);
    assert_eq!(payload.data.feature_strategies[0].sort_order, 1);
    assert_eq!(payload.feature_environments_with_variants().len(), 1);
    assert_eq!(payload.data.feature_tags[0].tag_value, "payments");
}

#[test]
fn test_distinct_feature_names_collapse_duplicates() {
    let data: TransferData =
        serde_json::from_str(r#"{"features":[{"name":"a"},{"name":"b"},{"name":"a"}]}"#).unwrap();

    assert_eq!(data.feature_names().len(), 3);
    assert_eq!(data.distinct_feature_names().len(), 2);
}

#[test]
fn test_parent_feature_names_are_deduplicated_in_payload_order() {
    let data: TransferData = serde_json::from_str(
        r#"{"dependencies":[
            {"feature":"wallet","dependencies":[{"feature":"payments"},{"feature":"auth"}]},
            {"feature":"checkout","dependencies":[{"feature":"payments","enabled":false}]}
        ]}"#,
    )
    .unwrap();

    assert_eq!(data.parent_feature_names(), vec!["payments", "auth"]);
}
