#![allow(dead_code)]

pub mod fixtures;

use ff_config::TransferConfig;
use ff_core::{TransferEvent, User};
use ff_store::{EventSink, MemoryBackend, MemoryState, StoreError, StoreResult};
use ff_transfer::{ExportImportService, TransferContext};

use std::sync::Arc;

use async_trait::async_trait;

pub const PROJECT: &str = "default";
pub const ENVIRONMENT: &str = "production";
pub const ADMIN: &str = "admin";

/// Destination backend plus a service wired to it.
pub struct Harness {
    pub backend: Arc<MemoryBackend>,
    pub service: ExportImportService,
}

impl Harness {
    pub fn new(state: MemoryState) -> Self {
        Self::with_config(state, &TransferConfig::default())
    }

    pub fn with_limit(state: MemoryState, max_features_per_import: usize) -> Self {
        Self::with_config(
            state,
            &TransferConfig {
                max_features_per_import,
            },
        )
    }

    fn with_config(state: MemoryState, config: &TransferConfig) -> Self {
        let backend = Arc::new(MemoryBackend::from_state(state));
        let ctx = TransferContext::from_backend(backend.clone(), config);
        Self {
            backend,
            service: ExportImportService::new(ctx),
        }
    }

    /// Same backend, but audit events go to a sink that always fails.
    pub fn with_failing_events(state: MemoryState) -> Self {
        let backend = Arc::new(MemoryBackend::from_state(state));
        let ctx = TransferContext::from_backend(backend.clone(), &TransferConfig::default())
            .with_event_sink(Arc::new(FailingEventSink));
        Self {
            backend,
            service: ExportImportService::new(ctx),
        }
    }

    pub async fn state(&self) -> MemoryState {
        self.backend.snapshot().await
    }
}

pub fn admin() -> User {
    User::new(ADMIN)
}

pub struct FailingEventSink;

#[async_trait]
impl EventSink for FailingEventSink {
    async fn store(&self, _event: TransferEvent) -> StoreResult<()> {
        Err(StoreError::internal("event sink offline"))
    }
}
