use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Acting identity. `username` is what audit events record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl User {
    pub fn new(username: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
        }
    }
}
