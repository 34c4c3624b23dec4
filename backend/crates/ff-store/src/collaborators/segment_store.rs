use crate::StoreResult;

use ff_core::{FeatureStrategySegment, Segment};

use async_trait::async_trait;

#[async_trait]
pub trait SegmentStore: Send + Sync {
    async fn get_all(&self) -> StoreResult<Vec<Segment>>;

    async fn get_all_feature_strategy_segments(&self) -> StoreResult<Vec<FeatureStrategySegment>>;
}
