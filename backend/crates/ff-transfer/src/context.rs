use ff_config::TransferConfig;
use ff_store::{
    ContextFieldCatalog, DependencyStore, EventSink, FeatureEnvironmentStore,
    FeatureStrategyStore, FeatureTagIndex, LinkStore, PermissionChecker, SegmentStore,
    StrategyCatalog, TagTypeCatalog, ToggleStore,
};

use std::sync::Arc;

/// Every collaborator the transfer pipeline reads from or writes to.
#[derive(Clone)]
pub struct TransferContext {
    pub toggles: Arc<dyn ToggleStore>,
    pub feature_environments: Arc<dyn FeatureEnvironmentStore>,
    pub feature_strategies: Arc<dyn FeatureStrategyStore>,
    pub strategies: Arc<dyn StrategyCatalog>,
    pub context_fields: Arc<dyn ContextFieldCatalog>,
    pub tag_types: Arc<dyn TagTypeCatalog>,
    pub feature_tags: Arc<dyn FeatureTagIndex>,
    pub segments: Arc<dyn SegmentStore>,
    pub dependencies: Arc<dyn DependencyStore>,
    pub links: Arc<dyn LinkStore>,
    pub permissions: Arc<dyn PermissionChecker>,
    pub events: Arc<dyn EventSink>,
    pub max_features_per_import: usize,
}

impl TransferContext {
    /// Uses one backend for every collaborator.
    pub fn from_backend<B>(backend: Arc<B>, config: &TransferConfig) -> Self
    where
        B: ToggleStore
            + FeatureEnvironmentStore
            + FeatureStrategyStore
            + StrategyCatalog
            + ContextFieldCatalog
            + TagTypeCatalog
            + FeatureTagIndex
            + SegmentStore
            + DependencyStore
            + LinkStore
            + PermissionChecker
            + EventSink
            + 'static,
    {
        Self {
            toggles: backend.clone(),
            feature_environments: backend.clone(),
            feature_strategies: backend.clone(),
            strategies: backend.clone(),
            context_fields: backend.clone(),
            tag_types: backend.clone(),
            feature_tags: backend.clone(),
            segments: backend.clone(),
            dependencies: backend.clone(),
            links: backend.clone(),
            permissions: backend.clone(),
            events: backend,
            max_features_per_import: config.max_features_per_import,
        }
    }

    pub fn with_event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }
}
