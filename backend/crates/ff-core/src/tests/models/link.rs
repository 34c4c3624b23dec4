use crate::{FeatureLink, FeatureLinks};

fn stored(id: &str, feature: &str, url: &str) -> FeatureLink {
    FeatureLink {
        id: id.to_string(),
        feature_name: feature.to_string(),
        url: url.to_string(),
        title: None,
    }
}

#[test]
fn test_group_keeps_source_ids_and_sorts_by_feature() {
    let links = vec![
        stored("2", "wallet", "https://example.com/wallet"),
        stored("1", "checkout", "https://example.com/checkout"),
    ];

    let grouped = FeatureLinks::group(&links);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].feature, "checkout");
    assert_eq!(grouped[0].links[0].id.as_deref(), Some("1"));
    assert_eq!(grouped[1].links[0].url, "https://example.com/wallet");
}

#[test]
fn test_link_without_title_omits_it_when_serialized() {
    let json = serde_json::to_string(&crate::Link::new("https://example.com", None)).unwrap();

    assert_eq!(json, r#"{"url":"https://example.com"}"#);
}
