use ff_core::ImportPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureLimitExceeded {
    pub count: usize,
    pub limit: usize,
}

/// `Some` when the payload names more distinct features than `limit`.
///
/// This is a flat count of distinct feature names per import. Features that
/// already exist count the same as new ones, and the destination project's
/// current size plays no part.
pub fn feature_limit(payload: &ImportPayload, limit: usize) -> Option<FeatureLimitExceeded> {
    let count = payload.data.distinct_feature_names().len();
    (count > limit).then_some(FeatureLimitExceeded { count, limit })
}
