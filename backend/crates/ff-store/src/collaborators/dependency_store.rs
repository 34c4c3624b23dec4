use crate::StoreResult;

use ff_core::{FeatureDependency, ParentDependency};

use async_trait::async_trait;

#[async_trait]
pub trait DependencyStore: Send + Sync {
    /// Edges whose child is one of `names`.
    async fn get_dependencies(&self, names: &[String]) -> StoreResult<Vec<FeatureDependency>>;

    /// Replaces the edge between `child` and `parent.feature` if one exists.
    /// The child must live in `project` and the parent must exist.
    async fn upsert_dependency(
        &self,
        project: &str,
        child: &str,
        parent: ParentDependency,
    ) -> StoreResult<()>;
}
