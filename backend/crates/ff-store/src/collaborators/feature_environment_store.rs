use crate::StoreResult;

use ff_core::{FeatureEnvironment, Variant};

use async_trait::async_trait;

#[async_trait]
pub trait FeatureEnvironmentStore: Send + Sync {
    async fn get_all_by_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<Vec<FeatureEnvironment>>;

    async fn set_enabled(
        &self,
        project: &str,
        feature: &str,
        environment: &str,
        enabled: bool,
    ) -> StoreResult<()>;

    /// Replaces the variant list of `feature` in `environment`.
    async fn save_variants(
        &self,
        project: &str,
        feature: &str,
        environment: &str,
        variants: Vec<Variant>,
    ) -> StoreResult<()>;
}
