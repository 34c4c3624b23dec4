use crate::{TransferContext, TransferResult};

use ff_core::{ImportPayload, StrategySchema};

use std::collections::BTreeSet;

/// Strategy records whose type the destination's catalog does not know.
pub async fn unsupported_strategies(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<StrategySchema>> {
    let supported: BTreeSet<String> = ctx
        .strategies
        .get_strategies()
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();

    Ok(payload
        .data
        .feature_strategies
        .iter()
        .filter(|strategy| !supported.contains(&strategy.name))
        .cloned()
        .collect())
}
