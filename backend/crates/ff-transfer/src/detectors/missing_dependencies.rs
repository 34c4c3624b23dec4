use crate::{TransferContext, TransferResult};

use ff_core::ImportPayload;

use std::collections::BTreeSet;

/// Parents named in `dependencies` that are neither imported alongside
/// their children nor already present in the destination, in payload order.
pub async fn missing_dependencies(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<String>> {
    let imported = payload.data.distinct_feature_names();
    let parents: Vec<String> = payload
        .data
        .parent_feature_names()
        .into_iter()
        .filter(|name| !imported.contains(name))
        .collect();
    if parents.is_empty() {
        return Ok(Vec::new());
    }

    let existing: BTreeSet<String> = ctx
        .toggles
        .get_all_by_names(&parents)
        .await?
        .into_iter()
        .map(|f| f.name)
        .collect();

    Ok(parents
        .into_iter()
        .filter(|name| !existing.contains(name))
        .collect())
}
