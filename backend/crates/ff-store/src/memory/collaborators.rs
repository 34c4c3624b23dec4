use crate::{
    ContextFieldCatalog, DependencyStore, EventSink, FeatureEnvironmentStore,
    FeatureStrategyStore, FeatureTagIndex, LinkStore, MemoryBackend, PermissionChecker,
    SegmentStore, StoreError, StoreResult, StrategyCatalog, TagTypeCatalog, ToggleStore,
};

use ff_core::{
    ContextField, FeatureDependency, FeatureEnvironment, FeatureLink, FeatureStrategy,
    FeatureStrategySegment, FeatureTag, FeatureToggle, Link, NewFeature, NewStrategy,
    ParentDependency, Permission, Segment, StrategyDefinition, Tag, TagType, TransferEvent, User,
    Variant,
};

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

fn contains(names: &[String], name: &str) -> bool {
    names.iter().any(|n| n == name)
}

#[async_trait]
impl ToggleStore for MemoryBackend {
    async fn get_all_by_names(&self, names: &[String]) -> StoreResult<Vec<FeatureToggle>> {
        let state = self.state.read().await;
        Ok(state
            .features
            .iter()
            .filter(|f| contains(names, &f.name))
            .cloned()
            .collect())
    }

    async fn create(&self, project: &str, feature: NewFeature) -> StoreResult<FeatureToggle> {
        let mut state = self.state.write().await;
        if state.features.iter().any(|f| f.name == feature.name) {
            return Err(StoreError::already_exists("Feature", feature.name));
        }

        let created = FeatureToggle::new(project, feature);
        state.features.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl FeatureEnvironmentStore for MemoryBackend {
    async fn get_all_by_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<Vec<FeatureEnvironment>> {
        let state = self.state.read().await;
        Ok(state
            .feature_environments
            .iter()
            .filter(|row| row.environment == environment && contains(names, &row.feature_name))
            .cloned()
            .collect())
    }

    async fn set_enabled(
        &self,
        project: &str,
        feature: &str,
        environment: &str,
        enabled: bool,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        ensure_feature_in_project(&state.features, project, feature)?;

        let row = environment_row(&mut state.feature_environments, feature, environment);
        row.enabled = enabled;
        Ok(())
    }

    async fn save_variants(
        &self,
        project: &str,
        feature: &str,
        environment: &str,
        variants: Vec<Variant>,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        ensure_feature_in_project(&state.features, project, feature)?;

        let row = environment_row(&mut state.feature_environments, feature, environment);
        row.variants = variants;
        Ok(())
    }
}

fn ensure_feature_in_project(
    features: &[FeatureToggle],
    project: &str,
    feature: &str,
) -> StoreResult<()> {
    if features
        .iter()
        .any(|f| f.name == feature && f.project == project)
    {
        Ok(())
    } else {
        Err(StoreError::not_found(
            "Feature",
            format!("{} (in project {})", feature, project),
        ))
    }
}

fn environment_row<'a>(
    rows: &'a mut Vec<FeatureEnvironment>,
    feature: &str,
    environment: &str,
) -> &'a mut FeatureEnvironment {
    let index = match rows
        .iter()
        .position(|row| row.feature_name == feature && row.environment == environment)
    {
        Some(index) => index,
        None => {
            rows.push(FeatureEnvironment {
                feature_name: feature.to_string(),
                environment: environment.to_string(),
                enabled: false,
                variants: Vec::new(),
                last_seen_at: None,
            });
            rows.len() - 1
        }
    };
    &mut rows[index]
}

#[async_trait]
impl FeatureStrategyStore for MemoryBackend {
    async fn get_all_by_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<Vec<FeatureStrategy>> {
        let state = self.state.read().await;
        let mut strategies: Vec<FeatureStrategy> = state
            .feature_strategies
            .iter()
            .filter(|s| s.environment == environment && contains(names, &s.feature_name))
            .cloned()
            .collect();
        strategies.sort_by_key(|s| s.sort_order);
        Ok(strategies)
    }

    async fn strategies_exist_for_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .feature_strategies
            .iter()
            .any(|s| s.environment == environment && contains(names, &s.feature_name)))
    }

    async fn delete_strategies_for_features(
        &self,
        names: &[String],
        environment: &str,
    ) -> StoreResult<usize> {
        let mut state = self.state.write().await;

        let removed: BTreeSet<String> = state
            .feature_strategies
            .iter()
            .filter(|s| s.environment == environment && contains(names, &s.feature_name))
            .map(|s| s.id.clone())
            .collect();

        state
            .feature_strategies
            .retain(|s| !removed.contains(&s.id));
        state
            .feature_strategy_segments
            .retain(|link| !removed.contains(&link.feature_strategy_id));

        Ok(removed.len())
    }

    async fn create_strategy(
        &self,
        project: &str,
        environment: &str,
        strategy: NewStrategy,
    ) -> StoreResult<FeatureStrategy> {
        let mut state = self.state.write().await;
        ensure_feature_in_project(&state.features, project, &strategy.feature_name)?;

        let created = FeatureStrategy {
            id: Uuid::new_v4().to_string(),
            feature_name: strategy.feature_name,
            project_id: project.to_string(),
            environment: environment.to_string(),
            strategy_name: strategy.strategy_name,
            title: strategy.title,
            disabled: strategy.disabled,
            constraints: strategy.constraints,
            parameters: strategy.parameters,
            sort_order: strategy.sort_order,
            created_at: Some(Utc::now()),
        };
        state.feature_strategies.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl StrategyCatalog for MemoryBackend {
    async fn get_strategies(&self) -> StoreResult<Vec<StrategyDefinition>> {
        Ok(self.state.read().await.strategies.clone())
    }
}

#[async_trait]
impl ContextFieldCatalog for MemoryBackend {
    async fn get_all(&self) -> StoreResult<Vec<ContextField>> {
        Ok(self.state.read().await.context_fields.clone())
    }

    async fn get(&self, name: &str) -> StoreResult<Option<ContextField>> {
        let state = self.state.read().await;
        Ok(state.context_fields.iter().find(|f| f.name == name).cloned())
    }

    async fn create_context_field(&self, field: ContextField) -> StoreResult<ContextField> {
        let mut state = self.state.write().await;
        if state.context_fields.iter().any(|f| f.name == field.name) {
            return Err(StoreError::already_exists("Context field", field.name));
        }

        let created = ContextField {
            created_at: Some(Utc::now()),
            ..field
        };
        state.context_fields.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl TagTypeCatalog for MemoryBackend {
    async fn get_all(&self) -> StoreResult<Vec<TagType>> {
        Ok(self.state.read().await.tag_types.clone())
    }

    async fn create_tag_type(&self, tag_type: TagType) -> StoreResult<TagType> {
        let mut state = self.state.write().await;
        if state.tag_types.iter().any(|t| t.name == tag_type.name) {
            return Err(StoreError::already_exists("Tag type", tag_type.name));
        }

        state.tag_types.push(tag_type.clone());
        Ok(tag_type)
    }
}

#[async_trait]
impl FeatureTagIndex for MemoryBackend {
    async fn get_all_by_features(&self, names: &[String]) -> StoreResult<Vec<FeatureTag>> {
        let state = self.state.read().await;
        Ok(state
            .feature_tags
            .iter()
            .filter(|t| contains(names, &t.feature_name))
            .cloned()
            .collect())
    }

    async fn add_tag(&self, feature: &str, tag: Tag) -> StoreResult<FeatureTag> {
        let mut state = self.state.write().await;
        if !state.features.iter().any(|f| f.name == feature) {
            return Err(StoreError::not_found("Feature", feature));
        }
        if !state.tag_types.iter().any(|t| t.name == tag.tag_type) {
            return Err(StoreError::not_found("Tag type", tag.tag_type));
        }

        let association = FeatureTag::new(feature, &tag.tag_type, &tag.value);
        if !state.feature_tags.contains(&association) {
            state.feature_tags.push(association.clone());
        }
        Ok(association)
    }

    async fn delete_tags_for_features(&self, names: &[String]) -> StoreResult<usize> {
        let mut state = self.state.write().await;
        let before = state.feature_tags.len();
        state
            .feature_tags
            .retain(|t| !contains(names, &t.feature_name));
        Ok(before - state.feature_tags.len())
    }

    async fn get_all_features_for_tag(&self, tag_value: &str) -> StoreResult<Vec<String>> {
        let state = self.state.read().await;
        let names: BTreeSet<String> = state
            .feature_tags
            .iter()
            .filter(|t| t.tag_value == tag_value)
            .map(|t| t.feature_name.clone())
            .collect();
        Ok(names.into_iter().collect())
    }
}

#[async_trait]
impl SegmentStore for MemoryBackend {
    async fn get_all(&self) -> StoreResult<Vec<Segment>> {
        Ok(self.state.read().await.segments.clone())
    }

    async fn get_all_feature_strategy_segments(&self) -> StoreResult<Vec<FeatureStrategySegment>> {
        Ok(self.state.read().await.feature_strategy_segments.clone())
    }
}

#[async_trait]
impl DependencyStore for MemoryBackend {
    async fn get_dependencies(&self, names: &[String]) -> StoreResult<Vec<FeatureDependency>> {
        let state = self.state.read().await;
        Ok(state
            .dependencies
            .iter()
            .filter(|d| contains(names, &d.child))
            .cloned()
            .collect())
    }

    async fn upsert_dependency(
        &self,
        project: &str,
        child: &str,
        parent: ParentDependency,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        ensure_feature_in_project(&state.features, project, child)?;
        if child == parent.feature {
            return Err(StoreError::validation(format!(
                "Feature {} cannot depend on itself",
                child
            )));
        }
        if !state.features.iter().any(|f| f.name == parent.feature) {
            return Err(StoreError::not_found("Feature", parent.feature));
        }

        state
            .dependencies
            .retain(|d| !(d.child == child && d.parent.feature == parent.feature));
        state.dependencies.push(FeatureDependency {
            child: child.to_string(),
            parent,
        });
        Ok(())
    }
}

#[async_trait]
impl LinkStore for MemoryBackend {
    async fn get_links(&self, names: &[String]) -> StoreResult<Vec<FeatureLink>> {
        let state = self.state.read().await;
        Ok(state
            .links
            .iter()
            .filter(|l| contains(names, &l.feature_name))
            .cloned()
            .collect())
    }

    async fn delete_links_for_features(&self, names: &[String]) -> StoreResult<usize> {
        let mut state = self.state.write().await;
        let before = state.links.len();
        state.links.retain(|l| !contains(names, &l.feature_name));
        Ok(before - state.links.len())
    }

    async fn create_link(
        &self,
        project: &str,
        feature: &str,
        link: Link,
    ) -> StoreResult<FeatureLink> {
        let mut state = self.state.write().await;
        ensure_feature_in_project(&state.features, project, feature)?;

        let created = FeatureLink {
            id: Uuid::new_v4().to_string(),
            feature_name: feature.to_string(),
            url: link.url,
            title: link.title,
        };
        state.links.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl PermissionChecker for MemoryBackend {
    async fn has_permission(
        &self,
        user: &User,
        permission: Permission,
        project: &str,
        environment: &str,
    ) -> StoreResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .grants
            .iter()
            .any(|grant| grant.grants(&user.username, permission, project, environment)))
    }
}

#[async_trait]
impl EventSink for MemoryBackend {
    async fn store(&self, event: TransferEvent) -> StoreResult<()> {
        self.state.write().await.events.push(event);
        Ok(())
    }
}
