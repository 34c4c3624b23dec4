use crate::StoreResult;

use ff_core::StrategyDefinition;

use async_trait::async_trait;

#[async_trait]
pub trait StrategyCatalog: Send + Sync {
    async fn get_strategies(&self) -> StoreResult<Vec<StrategyDefinition>>;
}
