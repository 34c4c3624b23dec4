use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LegalValue {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            description: None,
        }
    }
}

/// Named attribute usable in strategy constraints and variant stickiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextField {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub stickiness: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub legal_values: Vec<LegalValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContextField {
    pub fn new(name: &str, legal_values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            stickiness: false,
            sort_order: None,
            legal_values: legal_values.iter().map(|v| LegalValue::new(v)).collect(),
            created_at: None,
        }
    }

    /// A field is compatible when the destination has no field of that name,
    /// or when every legal value it lists is also legal at the destination.
    pub fn is_compatible_with(&self, existing: &[ContextField]) -> bool {
        let Some(matching) = existing.iter().find(|field| field.name == self.name) else {
            return true;
        };

        self.legal_values.iter().all(|legal| {
            matching
                .legal_values
                .iter()
                .any(|other| other.value == legal.value)
        })
    }

    pub fn without_bookkeeping(&self) -> Self {
        Self {
            created_at: None,
            ..self.clone()
        }
    }
}
