use crate::detectors::archived_features;
use crate::{TransferContext, TransferResult};

use ff_core::{ImportPayload, TransferData};

use std::collections::BTreeSet;

use log::debug;

/// Drops archived features and segment links. Returns a new payload.
pub async fn clean(ctx: &TransferContext, payload: &ImportPayload) -> TransferResult<ImportPayload> {
    let archived = archived_features(ctx, payload).await?;
    if !archived.is_empty() {
        debug!("Skipping archived features: {}", archived.join(", "));
    }

    let without_archived = remove_archived_features(payload, &archived);
    Ok(remap_segments(&without_archived))
}

/// Removes `archived` features and everything attached to them.
///
/// Feature environments, strategies, tags, dependencies and links survive
/// only when their feature does; tag types survive only when a surviving tag
/// uses them.
pub fn remove_archived_features(payload: &ImportPayload, archived: &[String]) -> ImportPayload {
    let archived: BTreeSet<&str> = archived.iter().map(String::as_str).collect();
    let data = &payload.data;

    let features: Vec<_> = data
        .features
        .iter()
        .filter(|f| !archived.contains(f.name.as_str()))
        .cloned()
        .collect();
    let surviving: BTreeSet<&str> = features.iter().map(|f| f.name.as_str()).collect();

    let feature_tags: Vec<_> = data
        .feature_tags
        .iter()
        .filter(|t| surviving.contains(t.feature_name.as_str()))
        .cloned()
        .collect();
    let used_tag_types: BTreeSet<&str> = feature_tags.iter().map(|t| t.tag_type.as_str()).collect();

    let cleaned = TransferData {
        feature_environments: data
            .feature_environments
            .iter()
            .filter(|env| surviving.contains(env.feature_name.as_str()))
            .cloned()
            .collect(),
        feature_strategies: data
            .feature_strategies
            .iter()
            .filter(|s| {
                s.feature_name
                    .as_deref()
                    .is_some_and(|name| surviving.contains(name))
            })
            .cloned()
            .collect(),
        tag_types: data
            .tag_types
            .iter()
            .filter(|t| used_tag_types.contains(t.name.as_str()))
            .cloned()
            .collect(),
        dependencies: data
            .dependencies
            .iter()
            .filter(|d| surviving.contains(d.feature.as_str()))
            .cloned()
            .collect(),
        links: data
            .links
            .iter()
            .filter(|l| surviving.contains(l.feature.as_str()))
            .cloned()
            .collect(),
        context_fields: data.context_fields.clone(),
        segments: data.segments.clone(),
        features,
        feature_tags,
    };

    payload.with_data(cleaned)
}

/// Clears every strategy's segment list. Segments are never carried across.
pub fn remap_segments(payload: &ImportPayload) -> ImportPayload {
    let mut data = payload.data.clone();
    for strategy in &mut data.feature_strategies {
        strategy.segments.clear();
    }
    payload.with_data(data)
}
