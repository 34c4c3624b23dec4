use crate::detectors::{in_payload_order, lookup_names};
use crate::{TransferContext, TransferResult};

use ff_core::ImportPayload;

use std::collections::BTreeSet;

/// Payload feature names whose destination record is archived.
pub async fn archived_features(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<String>> {
    let archived: BTreeSet<String> = ctx
        .toggles
        .get_all_by_names(&lookup_names(payload))
        .await?
        .into_iter()
        .filter(|f| f.is_archived())
        .map(|f| f.name)
        .collect();

    Ok(in_payload_order(payload, &archived))
}
