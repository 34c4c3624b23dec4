use crate::StoreResult;

use ff_core::{Permission, User};

use async_trait::async_trait;

#[async_trait]
pub trait PermissionChecker: Send + Sync {
    async fn has_permission(
        &self,
        user: &User,
        permission: Permission,
        project: &str,
        environment: &str,
    ) -> StoreResult<bool>;
}
