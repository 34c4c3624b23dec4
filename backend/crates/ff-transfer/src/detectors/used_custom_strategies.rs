use crate::{TransferContext, TransferResult};

use ff_core::ImportPayload;

use std::collections::BTreeSet;

/// Distinct strategy names that are known but user-defined (editable).
pub async fn used_custom_strategies(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<String>> {
    let custom: BTreeSet<String> = ctx
        .strategies
        .get_strategies()
        .await?
        .into_iter()
        .filter(|s| s.editable)
        .map(|s| s.name)
        .collect();

    let mut seen = BTreeSet::new();
    Ok(payload
        .data
        .feature_strategies
        .iter()
        .map(|s| s.name.clone())
        .filter(|name| custom.contains(name) && seen.insert(name.clone()))
        .collect())
}
