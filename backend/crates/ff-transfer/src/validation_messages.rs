//! Problem texts shown to whoever reviews a validation report.

use crate::detectors::FeatureLimitExceeded;

use ff_core::{ContextField, Problem, StrategySchema};

pub const UNSUPPORTED_STRATEGIES: &str =
    "We detected the following custom strategy in the import file that needs to be created first:";
pub const UNSUPPORTED_CONTEXT_FIELDS: &str = "We detected the following context fields that do not have matching legal values with the imported ones:";
pub const DUPLICATE_FEATURES: &str =
    "We detected the following features are duplicate in your import data:";
pub const USED_CUSTOM_STRATEGIES: &str = "The following strategy types will be used in import. Please make sure the strategy type parameters are configured as in source environment:";
pub const ARCHIVED_FEATURES: &str = "The following features will not be imported as they are currently archived. To import them, please unarchive them first:";
pub const EXISTING_PROJECT_FEATURES: &str =
    "The following features already exist in this project and will be overwritten:";
pub const MISSING_PERMISSIONS: &str = "We detected you are missing the following permissions:";
pub const MISSING_DEPENDENCIES: &str = "We detected the following dependent features that need to be imported or created first:";

// Pre-flight failures raised by apply.
pub const UNSUPPORTED_STRATEGIES_ERROR: &str = "Unsupported strategies";
pub const CONTEXT_FIELDS_ERROR: &str = "Context fields with errors";
pub const OTHER_PROJECT_FEATURES_ERROR: &str = "These features exist already in other projects";
pub const DUPLICATE_FEATURES_ERROR: &str = "Duplicate features in import data";
pub const FEATURE_LIMIT_ERROR: &str = "Too many features in one import";
pub const MISSING_DEPENDENCIES_ERROR: &str = "The following dependent features are missing";
pub const MISSING_PERMISSIONS_ERROR: &str = "You are missing permissions to import";
pub const MISSING_EXPORT_SCOPE_ERROR: &str = "Export requires either a tag or a list of features";

pub fn other_project_features_message(project: &str) -> String {
    format!(
        "You cannot import a features that already exist in other projects. You already have the following features defined outside of project {}:",
        project
    )
}

pub fn feature_limit_message(exceeded: &FeatureLimitExceeded) -> String {
    format!(
        "We detected you want to import {} features, exceeding the maximum limit of {} features per import.",
        exceeded.count, exceeded.limit
    )
}

pub struct ErrorFindings<'a> {
    pub project: &'a str,
    pub strategies: &'a [StrategySchema],
    pub context_fields: &'a [ContextField],
    pub other_project_features: &'a [String],
    pub duplicate_features: &'a [String],
    pub feature_limit: Option<FeatureLimitExceeded>,
    pub dependencies: &'a [String],
}

pub fn compile_errors(findings: &ErrorFindings<'_>) -> Vec<Problem> {
    let mut errors = Vec::new();

    if !findings.strategies.is_empty() {
        errors.push(Problem::new(
            UNSUPPORTED_STRATEGIES,
            findings.strategies.iter().map(|s| s.name.clone()).collect(),
        ));
    }
    if !findings.context_fields.is_empty() {
        errors.push(Problem::new(
            UNSUPPORTED_CONTEXT_FIELDS,
            findings
                .context_fields
                .iter()
                .map(|f| f.name.clone())
                .collect(),
        ));
    }
    if !findings.other_project_features.is_empty() {
        errors.push(Problem::new(
            other_project_features_message(findings.project),
            findings.other_project_features.to_vec(),
        ));
    }
    if !findings.duplicate_features.is_empty() {
        errors.push(Problem::new(
            DUPLICATE_FEATURES,
            findings.duplicate_features.to_vec(),
        ));
    }
    if let Some(exceeded) = &findings.feature_limit {
        errors.push(Problem::new(feature_limit_message(exceeded), Vec::new()));
    }
    if !findings.dependencies.is_empty() {
        errors.push(Problem::new(
            MISSING_DEPENDENCIES,
            findings.dependencies.to_vec(),
        ));
    }

    errors
}

pub fn compile_warnings(
    used_custom_strategies: &[String],
    archived_features: &[String],
    existing_project_features: &[String],
) -> Vec<Problem> {
    [
        (USED_CUSTOM_STRATEGIES, used_custom_strategies),
        (ARCHIVED_FEATURES, archived_features),
        (EXISTING_PROJECT_FEATURES, existing_project_features),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(message, items)| Problem::new(message, items.to_vec()))
    .collect()
}

pub fn compile_permission_errors(missing_permissions: &[String]) -> Vec<Problem> {
    if missing_permissions.is_empty() {
        return Vec::new();
    }
    vec![Problem::new(
        MISSING_PERMISSIONS,
        missing_permissions.to_vec(),
    )]
}
