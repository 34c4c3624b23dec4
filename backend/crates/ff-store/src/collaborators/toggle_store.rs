use crate::StoreResult;

use ff_core::{FeatureToggle, NewFeature};

use async_trait::async_trait;

#[async_trait]
pub trait ToggleStore: Send + Sync {
    /// Every feature record with one of `names`, in any project, archived included.
    async fn get_all_by_names(&self, names: &[String]) -> StoreResult<Vec<FeatureToggle>>;

    /// Fails with `AlreadyExists` when the name is taken in any project.
    async fn create(&self, project: &str, feature: NewFeature) -> StoreResult<FeatureToggle>;
}
