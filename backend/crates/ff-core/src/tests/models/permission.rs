use crate::Permission;

use std::str::FromStr;

#[test]
fn test_permission_as_str() {
    assert_eq!(Permission::UpdateFeature.as_str(), "UPDATE_FEATURE");
    assert_eq!(
        Permission::UpdateFeatureEnvironmentVariants.as_str(),
        "UPDATE_FEATURE_ENVIRONMENT_VARIANTS"
    );
}

#[test]
fn test_permission_from_str() {
    assert_eq!(
        Permission::from_str("CREATE_CONTEXT_FIELD").unwrap(),
        Permission::CreateContextField
    );
    assert_eq!(Permission::from_str("ADMIN").unwrap(), Permission::Admin);
    assert!(Permission::from_str("update_feature").is_err());
}

#[test]
fn test_permission_display_name() {
    assert_eq!(
        Permission::UpdateFeature.display_name(),
        "Update feature toggles"
    );
    assert_eq!(
        Permission::DeleteFeatureStrategy.display_name(),
        "Delete activation strategies"
    );
}

#[test]
fn test_permission_serde_uses_wire_name() {
    let json = serde_json::to_string(&Permission::CreateFeatureStrategy).unwrap();
    assert_eq!(json, "\"CREATE_FEATURE_STRATEGY\"");

    let parsed: Permission = serde_json::from_str("\"UPDATE_TAG_TYPE\"").unwrap();
    assert_eq!(parsed, Permission::UpdateTagType);
}
