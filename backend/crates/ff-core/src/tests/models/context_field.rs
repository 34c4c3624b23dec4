use crate::ContextField;

#[test]
fn test_field_absent_at_destination_is_compatible() {
    let imported = ContextField::new("region", &["eu", "us"]);
    let existing = vec![ContextField::new("appName", &[])];

    assert!(imported.is_compatible_with(&existing));
}

#[test]
fn test_field_with_subset_of_legal_values_is_compatible() {
    let imported = ContextField::new("region", &["eu"]);
    let existing = vec![ContextField::new("region", &["eu", "us"])];

    assert!(imported.is_compatible_with(&existing));
}

#[test]
fn test_field_with_unknown_legal_value_is_incompatible() {
    let imported = ContextField::new("region", &["eu", "apac"]);
    let existing = vec![ContextField::new("region", &["eu", "us"])];

    assert!(!imported.is_compatible_with(&existing));
}

#[test]
fn test_field_without_legal_values_is_compatible_with_any_definition() {
    let imported = ContextField::new("region", &[]);
    let existing = vec![ContextField::new("region", &["eu"])];

    assert!(imported.is_compatible_with(&existing));
}
