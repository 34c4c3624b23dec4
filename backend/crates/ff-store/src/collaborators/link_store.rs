use crate::StoreResult;

use ff_core::{FeatureLink, Link};

use async_trait::async_trait;

#[async_trait]
pub trait LinkStore: Send + Sync {
    async fn get_links(&self, names: &[String]) -> StoreResult<Vec<FeatureLink>>;

    /// Returns the number of links removed.
    async fn delete_links_for_features(&self, names: &[String]) -> StoreResult<usize>;

    /// Stores a link under a fresh id; any id on `link` is ignored.
    async fn create_link(&self, project: &str, feature: &str, link: Link)
        -> StoreResult<FeatureLink>;
}
