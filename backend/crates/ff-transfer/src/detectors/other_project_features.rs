use crate::detectors::lookup_names;
use crate::{TransferContext, TransferResult};

use ff_core::ImportPayload;

/// Live features with a payload name that belong to another project,
/// rendered `"<name> (in project <project>)"`.
pub async fn other_project_features(
    ctx: &TransferContext,
    payload: &ImportPayload,
) -> TransferResult<Vec<String>> {
    let existing = ctx.toggles.get_all_by_names(&lookup_names(payload)).await?;

    Ok(existing
        .iter()
        .filter(|f| !f.is_archived() && f.project != payload.project)
        .map(|f| format!("{} (in project {})", f.name, f.project))
        .collect())
}
