use serde::{Deserialize, Serialize};

/// Portable link. `id` is the source id and is never reused on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(url: &str, title: Option<&str>) -> Self {
        Self {
            id: None,
            url: url.to_string(),
            title: title.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLink {
    pub id: String,
    pub feature_name: String,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl From<&FeatureLink> for Link {
    fn from(link: &FeatureLink) -> Self {
        Self {
            id: Some(link.id.clone()),
            url: link.url.clone(),
            title: link.title.clone(),
        }
    }
}

/// Portable entry: every link of one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLinks {
    pub feature: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl FeatureLinks {
    /// Groups stored links by feature, features sorted by name.
    pub fn group(links: &[FeatureLink]) -> Vec<Self> {
        let mut sorted: Vec<&FeatureLink> = links.iter().collect();
        sorted.sort_by(|a, b| a.feature_name.cmp(&b.feature_name));

        let mut grouped: Vec<Self> = Vec::new();
        for link in sorted {
            match grouped.last_mut() {
                Some(last) if last.feature == link.feature_name => last.links.push(link.into()),
                _ => grouped.push(Self {
                    feature: link.feature_name.clone(),
                    links: vec![link.into()],
                }),
            }
        }
        grouped
    }
}
