use crate::{TransferContext, TransferResult};

use ff_core::{ImportPayload, TagType};

use std::collections::BTreeSet;

/// Payload tag types unknown at the destination, first definition per name.
pub async fn new_tag_types(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<TagType>> {
    let existing: BTreeSet<String> = ctx
        .tag_types
        .get_all()
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();

    let mut seen = BTreeSet::new();
    Ok(payload
        .data
        .tag_types
        .iter()
        .filter(|t| !existing.contains(&t.name) && seen.insert(t.name.clone()))
        .cloned()
        .collect())
}
