pub mod error;
pub mod models;
pub mod sync;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::constraint::Constraint;
pub use models::context_field::{ContextField, LegalValue};
pub use models::dependency::{FeatureDependencies, FeatureDependency, ParentDependency};
pub use models::event_type::EventType;
pub use models::feature::{
    DEFAULT_FEATURE_TYPE, FEATURE_NAME_MAX_LENGTH, FeatureSchema, FeatureToggle, NewFeature,
    validate_feature_name,
};
pub use models::feature_environment::{FeatureEnvironment, FeatureEnvironmentSchema};
pub use models::link::{FeatureLink, FeatureLinks, Link};
pub use models::permission::Permission;
pub use models::segment::{FeatureStrategySegment, Segment, SegmentRef};
pub use models::strategy::{
    FeatureStrategy, NewStrategy, STICKINESS_PARAMETER, StrategyDefinition, StrategyParameter,
    StrategySchema,
};
pub use models::tag::{FeatureTag, Tag, TagType};
pub use models::transfer_event::TransferEvent;
pub use models::user::User;
pub use models::variant::{Variant, VariantOverride, VariantPayload, WeightType};
pub use sync::export_query::{ExportQuery, ExportSelection};
pub use sync::import_payload::ImportPayload;
pub use sync::transfer_data::{ExportSnapshot, TransferData};
pub use sync::validation_report::{Problem, ValidationReport};
