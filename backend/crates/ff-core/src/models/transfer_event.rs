use crate::{EventType, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit record of a completed import or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub created_by: String,
    pub project: Option<String>,
    pub environment: Option<String>,
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl TransferEvent {
    pub fn features_imported(project: &str, environment: &str, user: &User) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type: EventType::FeaturesImported,
            created_by: user.username.clone(),
            project: Some(project.to_string()),
            environment: Some(environment.to_string()),
            data: None,
            created_at: Utc::now(),
        }
    }

    pub fn features_exported(data: serde_json::Value, user: &User) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type: EventType::FeaturesExported,
            created_by: user.username.clone(),
            project: None,
            environment: None,
            data: Some(data),
            created_at: Utc::now(),
        }
    }
}
