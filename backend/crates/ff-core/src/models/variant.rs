use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightType {
    #[default]
    Variable,
    Fix,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPayload {
    #[serde(rename = "type")]
    pub payload_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOverride {
    pub context_name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Named payload + weight option of a feature within one environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub weight_type: WeightType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stickiness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<VariantPayload>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<VariantOverride>,
}

impl Variant {
    pub fn new(name: &str, weight: u32) -> Self {
        Self {
            name: name.to_string(),
            weight,
            weight_type: WeightType::Variable,
            stickiness: None,
            payload: None,
            overrides: Vec::new(),
        }
    }

    /// True when the variant's stickiness or one of its overrides names `field`.
    pub fn references_context_field(&self, field: &str) -> bool {
        self.stickiness.as_deref() == Some(field)
            || self
                .overrides
                .iter()
                .any(|override_| override_.context_name == field)
    }
}
