use crate::{Variant, VariantOverride, WeightType};

#[test]
fn test_variant_references_context_field() {
    let mut variant = Variant::new("blue", 500);
    variant.stickiness = Some("sessionId".to_string());
    variant.overrides = vec![VariantOverride {
        context_name: "tenant".to_string(),
        values: vec!["acme".to_string()],
    }];

    assert!(variant.references_context_field("sessionId"));
    assert!(variant.references_context_field("tenant"));
    assert!(!variant.references_context_field("userId"));
}

#[test]
fn test_variant_defaults_when_deserialized() {
    let variant: Variant = serde_json::from_str(r#"{"name":"red"}"#).unwrap();

    assert_eq!(variant.weight, 0);
    assert_eq!(variant.weight_type, WeightType::Variable);
    assert!(variant.overrides.is_empty());
}
