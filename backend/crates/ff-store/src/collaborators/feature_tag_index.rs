use crate::StoreResult;

use ff_core::{FeatureTag, Tag};

use async_trait::async_trait;

#[async_trait]
pub trait FeatureTagIndex: Send + Sync {
    async fn get_all_by_features(&self, names: &[String]) -> StoreResult<Vec<FeatureTag>>;

    async fn add_tag(&self, feature: &str, tag: Tag) -> StoreResult<FeatureTag>;

    /// Returns the number of associations removed.
    async fn delete_tags_for_features(&self, names: &[String]) -> StoreResult<usize>;

    /// Names of features carrying a tag with this value, of any tag type.
    async fn get_all_features_for_tag(&self, tag_value: &str) -> StoreResult<Vec<String>>;
}
