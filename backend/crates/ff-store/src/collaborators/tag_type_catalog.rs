use crate::StoreResult;

use ff_core::TagType;

use async_trait::async_trait;

#[async_trait]
pub trait TagTypeCatalog: Send + Sync {
    async fn get_all(&self) -> StoreResult<Vec<TagType>>;

    async fn create_tag_type(&self, tag_type: TagType) -> StoreResult<TagType>;
}
