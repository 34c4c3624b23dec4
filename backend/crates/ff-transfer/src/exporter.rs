use crate::validation_messages::MISSING_EXPORT_SCOPE_ERROR;
use crate::{TransferContext, TransferError, TransferResult};

use ff_core::{
    ContextField, ExportQuery, ExportSelection, ExportSnapshot, FeatureDependencies,
    FeatureEnvironment, FeatureEnvironmentSchema, FeatureLinks, FeatureSchema, FeatureStrategy,
    FeatureStrategySegment, SegmentRef, StrategySchema, TransferEvent, User,
};

use std::collections::BTreeSet;

use log::{debug, warn};

/// Builds a portable snapshot of the selected features in one environment.
///
/// Only context fields, segments and tag types the exported records refer
/// to are included.
pub async fn export(
    ctx: &TransferContext,
    query: &ExportQuery,
    user: &User,
) -> TransferResult<ExportSnapshot> {
    let names = resolve_features(ctx, query).await?;
    debug!(
        "Exporting {} features from {}",
        names.len(),
        query.environment
    );

    let (
        features,
        feature_environments,
        feature_strategies,
        strategy_segments,
        context_fields,
        feature_tags,
        segments,
        tag_types,
        dependencies,
        links,
    ) = tokio::try_join!(
        ctx.toggles.get_all_by_names(&names),
        ctx.feature_environments
            .get_all_by_features(&names, &query.environment),
        ctx.feature_strategies
            .get_all_by_features(&names, &query.environment),
        ctx.segments.get_all_feature_strategy_segments(),
        ctx.context_fields.get_all(),
        ctx.feature_tags.get_all_by_features(&names),
        ctx.segments.get_all(),
        ctx.tag_types.get_all(),
        ctx.dependencies.get_dependencies(&names),
        ctx.links.get_links(&names),
    )?;

    let strategies: Vec<StrategySchema> = feature_strategies
        .iter()
        .map(|strategy| {
            StrategySchema::from_stored(strategy, segment_ids(strategy, &strategy_segments))
        })
        .collect();

    let used_segments: BTreeSet<i64> = strategies
        .iter()
        .flat_map(|s| s.segments.iter().copied())
        .collect();
    let used_tag_types: BTreeSet<&str> = feature_tags.iter().map(|t| t.tag_type.as_str()).collect();

    let snapshot = ExportSnapshot {
        features: features.iter().map(FeatureSchema::from).collect(),
        context_fields: context_fields
            .iter()
            .filter(|field| {
                is_referenced(field, &feature_environments, &feature_strategies)
            })
            .map(ContextField::without_bookkeeping)
            .collect(),
        segments: segments
            .iter()
            .filter(|segment| used_segments.contains(&segment.id))
            .map(SegmentRef::from)
            .collect(),
        tag_types: tag_types
            .into_iter()
            .filter(|t| used_tag_types.contains(t.name.as_str()))
            .collect(),
        feature_environments: feature_environments
            .iter()
            .map(FeatureEnvironmentSchema::from)
            .collect(),
        feature_strategies: strategies,
        feature_tags,
        dependencies: FeatureDependencies::group(&dependencies),
        links: FeatureLinks::group(&links),
    };

    record_export(ctx, &snapshot, user).await?;
    Ok(snapshot)
}

async fn resolve_features(ctx: &TransferContext, query: &ExportQuery) -> TransferResult<Vec<String>> {
    match query.selection() {
        Some(ExportSelection::Tag(tag)) => Ok(ctx.feature_tags.get_all_features_for_tag(&tag).await?),
        Some(ExportSelection::Features(features)) => Ok(features),
        None => Err(TransferError::bad_data(MISSING_EXPORT_SCOPE_ERROR, Vec::new())),
    }
}

fn segment_ids(strategy: &FeatureStrategy, links: &[FeatureStrategySegment]) -> Vec<i64> {
    links
        .iter()
        .filter(|link| link.feature_strategy_id == strategy.id)
        .map(|link| link.segment_id)
        .collect()
}

/// A field is referenced by a variant's stickiness or override, or by a
/// strategy's stickiness parameter or constraint.
fn is_referenced(
    field: &ContextField,
    environments: &[FeatureEnvironment],
    strategies: &[FeatureStrategy],
) -> bool {
    environments
        .iter()
        .flat_map(|env| env.variants.iter())
        .any(|variant| variant.references_context_field(&field.name))
        || strategies
            .iter()
            .any(|strategy| strategy.references_context_field(&field.name))
}

/// Serializing the snapshot can fail; storing the event is best-effort.
async fn record_export(
    ctx: &TransferContext,
    snapshot: &ExportSnapshot,
    user: &User,
) -> TransferResult<()> {
    let event = TransferEvent::features_exported(serde_json::to_value(snapshot)?, user);
    if let Err(e) = ctx.events.store(event).await {
        warn!("Failed to record export: {}", e);
    }
    Ok(())
}
