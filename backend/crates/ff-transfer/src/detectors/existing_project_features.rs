use crate::detectors::{in_payload_order, lookup_names};
use crate::{TransferContext, TransferResult};

use ff_core::ImportPayload;

use std::collections::BTreeSet;

/// Payload features already live in the target project.
pub async fn existing_project_features(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<String>> {
    let existing: BTreeSet<String> = ctx
        .toggles
        .get_all_by_names(&lookup_names(payload))
        .await?
        .into_iter()
        .filter(|f| !f.is_archived() && f.project == payload.project)
        .map(|f| f.name)
        .collect();

    Ok(in_payload_order(payload, &existing))
}
