use crate::{TransferContext, TransferResult};

use ff_core::{ContextField, ImportPayload};

/// Payload context fields whose legal values clash with a same-named
/// destination field.
pub async fn unsupported_context_fields(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<ContextField>> {
    let available = ctx.context_fields.get_all().await?;

    Ok(payload
        .data
        .context_fields
        .iter()
        .filter(|field| !field.is_compatible_with(&available))
        .cloned()
        .collect())
}
