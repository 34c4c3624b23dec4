use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TagType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            icon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub value: String,
}

/// Association of one tag with one feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTag {
    pub feature_name: String,
    pub tag_type: String,
    pub tag_value: String,
}

impl FeatureTag {
    pub fn new(feature_name: &str, tag_type: &str, tag_value: &str) -> Self {
        Self {
            feature_name: feature_name.to_string(),
            tag_type: tag_type.to_string(),
            tag_value: tag_value.to_string(),
        }
    }

    pub fn tag(&self) -> Tag {
        Tag {
            tag_type: self.tag_type.clone(),
            value: self.tag_value.clone(),
        }
    }
}
