use serde::{Deserialize, Serialize};

/// Export request for one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub environment: String,

    #[serde(default)]
    pub features: Option<Vec<String>>,

    /// Tag value; selects every feature carrying a tag with this value
    #[serde(default)]
    pub tag: Option<String>,

    /// Transport framing only
    #[serde(default)]
    pub download_file: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSelection {
    Tag(String),
    Features(Vec<String>),
}

impl ExportQuery {
    pub fn for_features(environment: &str, features: &[&str]) -> Self {
        Self {
            environment: environment.to_string(),
            features: Some(features.iter().map(|f| f.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn for_tag(environment: &str, tag: &str) -> Self {
        Self {
            environment: environment.to_string(),
            tag: Some(tag.to_string()),
            ..Self::default()
        }
    }

    /// A tag takes precedence over an explicit feature list. An empty list
    /// selects nothing.
    pub fn selection(&self) -> Option<ExportSelection> {
        if let Some(tag) = &self.tag {
            return Some(ExportSelection::Tag(tag.clone()));
        }

        match &self.features {
            Some(features) if !features.is_empty() => {
                Some(ExportSelection::Features(features.clone()))
            }
            _ => None,
        }
    }
}
