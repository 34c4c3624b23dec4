use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Parent a feature depends on. The child is active only while the parent is
/// enabled (or disabled, when `enabled` is false) and, if `variants` is
/// non-empty, resolves to one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentDependency {
    pub feature: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl ParentDependency {
    pub fn new(feature: &str) -> Self {
        Self {
            feature: feature.to_string(),
            enabled: true,
            variants: Vec::new(),
        }
    }
}

/// Stored edge from a child feature to one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDependency {
    pub child: String,
    pub parent: ParentDependency,
}

/// Portable entry: every parent of one child feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDependencies {
    pub feature: String,
    #[serde(default)]
    pub dependencies: Vec<ParentDependency>,
}

impl FeatureDependencies {
    /// Groups stored edges by child, children sorted by name.
    pub fn group(edges: &[FeatureDependency]) -> Vec<Self> {
        let mut grouped: Vec<Self> = Vec::new();
        let mut sorted: Vec<&FeatureDependency> = edges.iter().collect();
        sorted.sort_by(|a, b| a.child.cmp(&b.child));

        for edge in sorted {
            match grouped.last_mut() {
                Some(last) if last.feature == edge.child => {
                    last.dependencies.push(edge.parent.clone())
                }
                _ => grouped.push(Self {
                    feature: edge.child.clone(),
                    dependencies: vec![edge.parent.clone()],
                }),
            }
        }
        grouped
    }
}
