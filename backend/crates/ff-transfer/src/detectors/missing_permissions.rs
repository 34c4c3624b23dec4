use crate::detectors::{lookup_names, new_context_fields, new_tag_types};
use crate::{TransferContext, TransferError, TransferResult};

use ff_core::{ImportPayload, Permission, User};

use std::collections::BTreeSet;

use futures::future::try_join_all;

/// The smallest permission set an import of `payload` needs.
///
/// `UpdateFeature` is always required; every other permission is added only
/// when the payload would exercise it.
pub async fn required_permissions(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<Permission>> {
    let names = lookup_names(payload);

    let (new_tag_types, new_context_fields, strategies_exist, existing) = tokio::try_join!(
        new_tag_types(ctx, payload),
        new_context_fields(ctx, payload),
        async {
            ctx.feature_strategies
                .strategies_exist_for_features(&names, &payload.environment)
                .await
                .map_err(TransferError::from)
        },
        async {
            ctx.toggles
                .get_all_by_names(&names)
                .await
                .map_err(TransferError::from)
        },
    )?;

    let existing: BTreeSet<String> = existing.into_iter().map(|f| f.name).collect();

    let mut permissions = vec![Permission::UpdateFeature];
    if names.iter().any(|name| !existing.contains(name)) {
        permissions.push(Permission::CreateFeature);
    }
    if !payload.data.feature_strategies.is_empty() {
        permissions.push(Permission::CreateFeatureStrategy);
    }
    if strategies_exist {
        permissions.push(Permission::DeleteFeatureStrategy);
    }
    if !new_tag_types.is_empty() {
        permissions.push(Permission::UpdateTagType);
    }
    if !new_context_fields.is_empty() {
        permissions.push(Permission::CreateContextField);
    }
    if !payload.feature_environments_with_variants().is_empty() {
        permissions.push(Permission::UpdateFeatureEnvironmentVariants);
    }

    Ok(permissions)
}

/// Display names of required permissions `user` does not hold in the
/// target project and environment.
pub async fn missing_permissions(
    ctx: &TransferContext,
    payload: &ImportPayload,
    user: &User,
) -> TransferResult<Vec<String>> {
    let required = required_permissions(ctx, payload).await?;

    let checks = try_join_all(required.into_iter().map(|permission| async move {
        let granted = ctx
            .permissions
            .has_permission(user, permission, &payload.project, &payload.environment)
            .await?;
        Ok::<_, TransferError>((permission, granted))
    }))
    .await?;

    Ok(checks
        .into_iter()
        .filter(|(_, granted)| !granted)
        .map(|(permission, _)| permission.display_name().to_string())
        .collect())
}
