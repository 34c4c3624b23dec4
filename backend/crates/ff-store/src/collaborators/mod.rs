//! Narrow interfaces onto the destination's state.
//!
//! Every trait is object-safe and `Send + Sync` so the transfer service can
//! hold them as `Arc<dyn ...>`.

mod context_field_catalog;
mod dependency_store;
mod event_sink;
mod feature_environment_store;
mod feature_strategy_store;
mod feature_tag_index;
mod link_store;
mod permission_checker;
mod segment_store;
mod strategy_catalog;
mod tag_type_catalog;
mod toggle_store;

pub use context_field_catalog::ContextFieldCatalog;
pub use dependency_store::DependencyStore;
pub use event_sink::EventSink;
pub use feature_environment_store::FeatureEnvironmentStore;
pub use feature_strategy_store::FeatureStrategyStore;
pub use feature_tag_index::FeatureTagIndex;
pub use link_store::LinkStore;
pub use permission_checker::PermissionChecker;
pub use segment_store::SegmentStore;
pub use strategy_catalog::StrategyCatalog;
pub use tag_type_catalog::TagTypeCatalog;
pub use toggle_store::ToggleStore;
