use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub message: String,
    pub affected_items: Vec<String>,
}

impl Problem {
    pub fn new(message: impl Into<String>, affected_items: Vec<String>) -> Self {
        Self {
            message: message.into(),
            affected_items,
        }
    }
}

/// Outcome of validating an import payload. Built per call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<Problem>,
    pub warnings: Vec<Problem>,
    pub permissions: Vec<Problem>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_missing_permissions(&self) -> bool {
        !self.permissions.is_empty()
    }

    /// An import would be attempted: no errors and no missing permissions.
    pub fn is_importable(&self) -> bool {
        !self.has_errors() && !self.has_missing_permissions()
    }
}
