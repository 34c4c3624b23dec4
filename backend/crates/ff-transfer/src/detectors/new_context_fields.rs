use crate::{TransferContext, TransferResult};

use ff_core::{ContextField, ImportPayload};

use std::collections::BTreeSet;

/// Payload context fields whose name the destination does not have.
pub async fn new_context_fields(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<ContextField>> {
    let existing: BTreeSet<String> = ctx
        .context_fields
        .get_all()
        .await?
        .into_iter()
        .map(|f| f.name)
        .collect();

    let mut seen = BTreeSet::new();
    Ok(payload
        .data
        .context_fields
        .iter()
        .filter(|f| !existing.contains(&f.name) && seen.insert(f.name.clone()))
        .cloned()
        .collect())
}
