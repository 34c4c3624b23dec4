use crate::cleaner::clean;
use crate::detectors::{
    duplicate_features, feature_limit, lookup_names, missing_dependencies, missing_permissions,
    new_context_fields, new_tag_types, other_project_features, unsupported_context_fields,
    unsupported_strategies,
};
use crate::validation_messages::{
    CONTEXT_FIELDS_ERROR, DUPLICATE_FEATURES_ERROR, FEATURE_LIMIT_ERROR,
    MISSING_DEPENDENCIES_ERROR, MISSING_PERMISSIONS_ERROR, OTHER_PROJECT_FEATURES_ERROR,
    UNSUPPORTED_STRATEGIES_ERROR, feature_limit_message,
};
use crate::{TransferContext, TransferError, TransferResult};

use ff_core::{ImportPayload, TransferEvent, User, validate_feature_name};

use futures::future::{join_all, try_join_all};
use log::{debug, warn};

/// Applies `payload` to the destination.
///
/// Not transactional: a failure after pre-flight leaves earlier phases
/// applied. Callers must serialize imports into the same project and
/// environment.
pub async fn apply(
    ctx: &TransferContext,
    payload: &ImportPayload,
    user: &User,
) -> TransferResult<()> {
    let cleaned = clean(ctx, payload).await?;

    verify(ctx, &cleaned, user).await?;

    create_toggles(ctx, &cleaned).await;
    import_variants(ctx, &cleaned).await?;
    import_tag_types(ctx, &cleaned).await?;
    import_tags(ctx, &cleaned).await?;
    import_context_fields(ctx, &cleaned).await?;
    import_links(ctx, &cleaned).await?;
    import_strategies(ctx, &cleaned).await?;
    import_statuses(ctx, &cleaned).await?;
    import_dependencies(ctx, &cleaned).await?;

    record_import(ctx, &cleaned, user).await;
    Ok(())
}

/// Re-derives the blocking conflicts. Nothing is written when this fails.
async fn verify(ctx: &TransferContext, payload: &ImportPayload, user: &User) -> TransferResult<()> {
    let (strategies, context_fields, permissions, other_projects, dependencies) = tokio::try_join!(
        unsupported_strategies(ctx, payload),
        unsupported_context_fields(ctx, payload),
        missing_permissions(ctx, payload, user),
        other_project_features(ctx, payload),
        missing_dependencies(ctx, payload),
    )?;

    if !strategies.is_empty() {
        return Err(TransferError::bad_data(
            UNSUPPORTED_STRATEGIES_ERROR,
            strategies.into_iter().map(|s| s.name).collect(),
        ));
    }
    if !context_fields.is_empty() {
        return Err(TransferError::bad_data(
            CONTEXT_FIELDS_ERROR,
            context_fields.into_iter().map(|f| f.name).collect(),
        ));
    }
    if !permissions.is_empty() {
        return Err(TransferError::invalid_operation(
            MISSING_PERMISSIONS_ERROR,
            permissions,
        ));
    }
    if !other_projects.is_empty() {
        return Err(TransferError::bad_data(
            OTHER_PROJECT_FEATURES_ERROR,
            other_projects,
        ));
    }
    if !dependencies.is_empty() {
        return Err(TransferError::bad_data(
            MISSING_DEPENDENCIES_ERROR,
            dependencies,
        ));
    }

    let duplicates = duplicate_features(payload);
    if !duplicates.is_empty() {
        return Err(TransferError::bad_data(DUPLICATE_FEATURES_ERROR, duplicates));
    }
    if let Some(exceeded) = feature_limit(payload, ctx.max_features_per_import) {
        return Err(TransferError::bad_data(
            FEATURE_LIMIT_ERROR,
            vec![feature_limit_message(&exceeded)],
        ));
    }

    Ok(())
}

/// Creates every feature. Failures (existing names included) are dropped so
/// re-importing into the same project refreshes the rest of the data.
async fn create_toggles(ctx: &TransferContext, payload: &ImportPayload) {
    let results = join_all(payload.data.features.iter().map(|feature| async move {
        validate_feature_name(&feature.name).map_err(|e| e.to_string())?;
        ctx.toggles
            .create(&payload.project, feature.to_new_feature())
            .await
            .map_err(|e| e.to_string())
    }))
    .await;

    for (feature, result) in payload.data.features.iter().zip(results) {
        if let Err(e) = result {
            debug!("Feature {} not created: {}", feature.name, e);
        }
    }
}

async fn import_variants(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<()> {
    let with_variants = payload.feature_environments_with_variants();
    debug!("Importing variants for {} features", with_variants.len());

    try_join_all(with_variants.into_iter().map(|env| {
        ctx.feature_environments.save_variants(
            &payload.project,
            &env.feature_name,
            &payload.environment,
            env.variants.clone(),
        )
    }))
    .await?;
    Ok(())
}

async fn import_tag_types(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<()> {
    let tag_types = new_tag_types(ctx, payload).await?;
    debug!("Creating {} tag types", tag_types.len());

    try_join_all(
        tag_types
            .into_iter()
            .map(|tag_type| ctx.tag_types.create_tag_type(tag_type)),
    )
    .await?;
    Ok(())
}

/// Full replace: every tag of every payload feature is removed first.
async fn import_tags(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<()> {
    let removed = ctx
        .feature_tags
        .delete_tags_for_features(&lookup_names(payload))
        .await?;
    debug!(
        "Replacing {} tags with {}",
        removed,
        payload.data.feature_tags.len()
    );

    try_join_all(
        payload
            .data
            .feature_tags
            .iter()
            .map(|tag| ctx.feature_tags.add_tag(&tag.feature_name, tag.tag())),
    )
    .await?;
    Ok(())
}

async fn import_context_fields(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<()> {
    let fields = new_context_fields(ctx, payload).await?;
    debug!("Creating {} context fields", fields.len());

    try_join_all(
        fields
            .into_iter()
            .map(|field| ctx.context_fields.create_context_field(field.without_bookkeeping())),
    )
    .await?;
    Ok(())
}

/// Full replace: features listed in `links` lose their existing links.
async fn import_links(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<()> {
    let linked: Vec<String> = payload
        .data
        .links
        .iter()
        .map(|entry| entry.feature.clone())
        .collect();
    if linked.is_empty() {
        return Ok(());
    }

    let removed = ctx.links.delete_links_for_features(&linked).await?;
    debug!("Replacing {} links on {} features", removed, linked.len());

    try_join_all(payload.data.links.iter().flat_map(|entry| {
        entry.links.iter().map(move |link| {
            ctx.links
                .create_link(&payload.project, &entry.feature, link.clone())
        })
    }))
    .await?;
    Ok(())
}

/// Full replace of the target environment's strategies.
async fn import_strategies(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<()> {
    let removed = ctx
        .feature_strategies
        .delete_strategies_for_features(&lookup_names(payload), &payload.environment)
        .await?;

    let strategies: Vec<_> = payload
        .data
        .feature_strategies
        .iter()
        .filter_map(|s| s.to_new_strategy())
        .collect();
    debug!(
        "Replacing {} strategies with {} in {}",
        removed,
        strategies.len(),
        payload.environment
    );

    try_join_all(strategies.into_iter().map(|strategy| {
        ctx.feature_strategies
            .create_strategy(&payload.project, &payload.environment, strategy)
    }))
    .await?;
    Ok(())
}

async fn import_statuses(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<()> {
    try_join_all(payload.data.feature_environments.iter().map(|env| {
        ctx.feature_environments.set_enabled(
            &payload.project,
            &env.feature_name,
            &payload.environment,
            env.enabled,
        )
    }))
    .await?;
    Ok(())
}

/// Upserts every parent edge of a payload feature. Existing edges to other
/// parents are left alone.
async fn import_dependencies(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<()> {
    let imported = payload.data.distinct_feature_names();
    let edges: Vec<_> = payload
        .data
        .dependencies
        .iter()
        .filter(|entry| imported.contains(&entry.feature))
        .flat_map(|entry| {
            entry
                .dependencies
                .iter()
                .map(move |parent| (entry.feature.as_str(), parent))
        })
        .collect();
    debug!("Importing {} dependencies", edges.len());

    try_join_all(edges.into_iter().map(|(child, parent)| {
        ctx.dependencies
            .upsert_dependency(&payload.project, child, parent.clone())
    }))
    .await?;
    Ok(())
}

/// The audit trail is best-effort; a failed write does not fail the import.
async fn record_import(ctx: &TransferContext, payload: &ImportPayload, user: &User) {
    let event = TransferEvent::features_imported(&payload.project, &payload.environment, user);
    if let Err(e) = ctx.events.store(event).await {
        warn!(
            "Failed to record import into {}/{}: {}",
            payload.project, payload.environment, e
        );
    }
}
