use crate::StoreResult;

use ff_core::TransferEvent;

use async_trait::async_trait;

/// Audit trail of completed imports and exports.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn store(&self, event: TransferEvent) -> StoreResult<()>;
}
