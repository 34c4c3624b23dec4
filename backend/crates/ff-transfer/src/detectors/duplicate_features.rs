use ff_core::ImportPayload;

use std::collections::{BTreeMap, BTreeSet};

/// Names listed more than once in `data.features`, in first-seen order.
pub fn duplicate_features(payload: &ImportPayload) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for feature in &payload.data.features {
        *counts.entry(feature.name.as_str()).or_default() += 1;
    }

    let mut reported = BTreeSet::new();
    payload
        .data
        .features
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| counts.get(name).copied().unwrap_or_default() > 1 && reported.insert(*name))
        .map(str::to_string)
        .collect()
}
