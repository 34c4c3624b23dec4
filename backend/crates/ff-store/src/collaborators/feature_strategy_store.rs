use crate::StoreResult;

use ff_core::{FeatureStrategy, NewStrategy};

use async_trait::async_trait;

#[async_trait]
pub trait FeatureStrategyStore: Send + Sync {
    async fn get_all_by_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<Vec<FeatureStrategy>>;

    async fn strategies_exist_for_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<bool>;

    /// Returns the number of strategies removed.
    async fn delete_strategies_for_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<usize>;

    async fn create_strategy(
        &self,
        project: &str,
        environment: &str,
        strategy: NewStrategy,
    ) -> StoreResult<FeatureStrategy>;
}
