use crate::{FeatureEnvironmentSchema, TransferData};

use serde::{Deserialize, Serialize};

/// Configuration to import into `project` / `environment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportPayload {
    pub project: String,
    pub environment: String,
    pub data: TransferData,
}

impl ImportPayload {
    pub fn new(project: &str, environment: &str, data: TransferData) -> Self {
        Self {
            project: project.to_string(),
            environment: environment.to_string(),
            data,
        }
    }

    pub fn feature_names(&self) -> Vec<String> {
        self.data.feature_names()
    }

    pub fn feature_environments_with_variants(&self) -> Vec<&FeatureEnvironmentSchema> {
        self.data
            .feature_environments
            .iter()
            .filter(|env| env.has_variants())
            .collect()
    }

    /// Same destination, different data.
    pub fn with_data(&self, data: TransferData) -> Self {
        Self {
            project: self.project.clone(),
            environment: self.environment.clone(),
            data,
        }
    }
}
