pub mod collaborators;
pub mod error;
pub mod memory;

#[cfg(test)]
mod tests;

pub use collaborators::{
    ContextFieldCatalog, DependencyStore, EventSink, FeatureEnvironmentStore,
    FeatureStrategyStore, FeatureTagIndex, LinkStore, PermissionChecker, SegmentStore,
    StrategyCatalog, TagTypeCatalog, ToggleStore,
};
pub use error::{Result as StoreResult, StoreError};
pub use memory::{MemoryBackend, MemoryState, PermissionGrant};
