use crate::{FeatureDependencies, FeatureDependency, ParentDependency};

fn edge(child: &str, parent: &str) -> FeatureDependency {
    FeatureDependency {
        child: child.to_string(),
        parent: ParentDependency::new(parent),
    }
}

#[test]
fn test_group_collects_parents_per_child_sorted_by_child() {
    let edges = vec![edge("wallet", "payments"), edge("checkout", "payments"), edge("wallet", "auth")];

    let grouped = FeatureDependencies::group(&edges);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].feature, "checkout");
    assert_eq!(grouped[1].feature, "wallet");
    let parents: Vec<&str> = grouped[1].dependencies.iter().map(|p| p.feature.as_str()).collect();
    assert_eq!(parents, vec!["payments", "auth"]);
}

#[test]
fn test_parent_dependency_defaults_to_enabled() {
    let parent: ParentDependency = serde_json::from_str(r#"{"feature":"payments"}"#).unwrap();

    assert!(parent.enabled);
    assert!(parent.variants.is_empty());
}
