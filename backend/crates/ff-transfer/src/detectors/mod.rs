//! Conflict detectors.
//!
//! Each detector compares an import payload against the destination and
//! returns one category of offending items. Detectors only read.

mod archived_features;
mod duplicate_features;
mod existing_project_features;
mod feature_limit;
mod missing_dependencies;
mod missing_permissions;
mod new_context_fields;
mod new_tag_types;
mod other_project_features;
mod unsupported_context_fields;
mod unsupported_strategies;
mod used_custom_strategies;

pub use archived_features::archived_features;
pub use duplicate_features::duplicate_features;
pub use existing_project_features::existing_project_features;
pub use feature_limit::{FeatureLimitExceeded, feature_limit};
pub use missing_dependencies::missing_dependencies;
pub use missing_permissions::{missing_permissions, required_permissions};
pub use new_context_fields::new_context_fields;
pub use new_tag_types::new_tag_types;
pub use other_project_features::other_project_features;
pub use unsupported_context_fields::unsupported_context_fields;
pub use unsupported_strategies::unsupported_strategies;
pub use used_custom_strategies::used_custom_strategies;

use ff_core::ImportPayload;

use std::collections::BTreeSet;

/// Distinct payload feature names, for collaborator lookups.
pub(crate) fn lookup_names(payload: &ImportPayload) -> Vec<String> {
    payload.data.distinct_feature_names().into_iter().collect()
}

/// Payload feature names that are in `matching`, first occurrence only,
/// in payload order.
pub(crate) fn in_payload_order(payload: &ImportPayload, matching: &BTreeSet<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    payload
        .data
        .features
        .iter()
        .filter(|f| matching.contains(&f.name) && seen.insert(f.name.clone()))
        .map(|f| f.name.clone())
        .collect()
}
