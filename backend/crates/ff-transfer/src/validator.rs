use crate::detectors::{
    archived_features, duplicate_features, existing_project_features, feature_limit,
    missing_dependencies, missing_permissions, other_project_features, unsupported_context_fields,
    unsupported_strategies, used_custom_strategies,
};
use crate::validation_messages::{
    ErrorFindings, compile_errors, compile_permission_errors, compile_warnings,
};
use crate::{TransferContext, TransferResult};

use ff_core::{ImportPayload, User, ValidationReport};

use log::debug;

/// Runs every detector against the destination and classifies the findings.
/// Never writes; only collaborator read failures are returned as errors.
pub async fn validate(
    ctx: &TransferContext,
    payload: &ImportPayload,
    user: &User,
) -> TransferResult<ValidationReport> {
    let (
        unsupported_strategies,
        used_custom_strategies,
        unsupported_context_fields,
        archived_features,
        other_project_features,
        existing_project_features,
        missing_permissions,
        missing_dependencies,
    ) = tokio::try_join!(
        unsupported_strategies(ctx, payload),
        used_custom_strategies(ctx, payload),
        unsupported_context_fields(ctx, payload),
        archived_features(ctx, payload),
        other_project_features(ctx, payload),
        existing_project_features(ctx, payload),
        missing_permissions(ctx, payload, user),
        missing_dependencies(ctx, payload),
    )?;
    let duplicate_features = duplicate_features(payload);
    let feature_limit = feature_limit(payload, ctx.max_features_per_import);

    let report = ValidationReport {
        errors: compile_errors(&ErrorFindings {
            project: &payload.project,
            strategies: &unsupported_strategies,
            context_fields: &unsupported_context_fields,
            other_project_features: &other_project_features,
            duplicate_features: &duplicate_features,
            feature_limit,
            dependencies: &missing_dependencies,
        }),
        warnings: compile_warnings(
            &used_custom_strategies,
            &archived_features,
            &existing_project_features,
        ),
        permissions: compile_permission_errors(&missing_permissions),
    };

    debug!(
        "Validated import into {}/{}: {} errors, {} warnings, {} permission problems",
        payload.project,
        payload.environment,
        report.errors.len(),
        report.warnings.len(),
        report.permissions.len()
    );

    Ok(report)
}
