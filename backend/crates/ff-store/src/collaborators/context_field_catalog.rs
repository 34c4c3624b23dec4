use crate::StoreResult;

use ff_core::ContextField;

use async_trait::async_trait;

#[async_trait]
pub trait ContextFieldCatalog: Send + Sync {
    async fn get_all(&self) -> StoreResult<Vec<ContextField>>;

    async fn get(&self, name: &str) -> StoreResult<Option<ContextField>>;

    async fn create_context_field(&self, field: ContextField) -> StoreResult<ContextField>;
}
