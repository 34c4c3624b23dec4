use ff_core::Permission;

use serde::{Deserialize, Serialize};

/// Grants `permission` to `username`. An unset project or environment
/// matches any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub username: String,
    pub permission: Permission,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

impl PermissionGrant {
    pub fn new(username: &str, permission: Permission) -> Self {
        Self {
            username: username.to_string(),
            permission,
            project: None,
            environment: None,
        }
    }

    pub fn admin(username: &str) -> Self {
        Self::new(username, Permission::Admin)
    }

    pub fn in_project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    pub fn in_environment(mut self, environment: &str) -> Self {
        self.environment = Some(environment.to_string());
        self
    }

    /// `Admin` satisfies every permission.
    pub fn grants(
        &self,
        username: &str,
        permission: Permission,
        project: &str,
        environment: &str,
    ) -> bool {
        self.username == username
            && (self.permission == permission || self.permission == Permission::Admin)
            && self.project.as_deref().is_none_or(|p| p == project)
            && self.environment.as_deref().is_none_or(|e| e == environment)
    }
}
