use crate::{MemoryState, StoreError, StoreResult};

use ff_core::TransferEvent;

use std::path::Path;

use chrono::Utc;
use log::debug;
use tokio::sync::RwLock;

/// In-memory destination backed by a single `RwLock<MemoryState>`.
///
/// Each collaborator call takes the lock once; there is no transaction
/// spanning calls.
pub struct MemoryBackend {
    pub(super) state: RwLock<MemoryState>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::from_state(MemoryState::with_built_in_strategies())
    }

    pub fn from_state(state: MemoryState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Reads a JSON state file. A missing file yields a fresh backend.
    pub async fn load(path: &Path) -> StoreResult<Self> {
        if !tokio::fs::try_exists(path)
            .await
            .map_err(|e| StoreError::io(path, e))?
        {
            debug!("State file {} not found, starting empty", path.display());
            return Ok(Self::new());
        }

        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| StoreError::io(path, e))?;
        let state: MemoryState = serde_json::from_slice(&contents)?;

        debug!(
            "Loaded state from {}: {} features, {} strategies",
            path.display(),
            state.features.len(),
            state.feature_strategies.len()
        );

        Ok(Self::from_state(state))
    }

    /// Writes the current state as pretty JSON, creating parent directories.
    pub async fn save(&self, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let contents = {
            let state = self.state.read().await;
            serde_json::to_vec_pretty(&*state)?
        };

        tokio::fs::write(path, contents)
            .await
            .map_err(|e| StoreError::io(path, e))?;

        debug!("Saved state to {}", path.display());
        Ok(())
    }

    pub async fn snapshot(&self) -> MemoryState {
        self.state.read().await.clone()
    }

    pub async fn events(&self) -> Vec<TransferEvent> {
        self.state.read().await.events.clone()
    }

    pub async fn archive_feature(&self, name: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let feature = state
            .features
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| StoreError::not_found("Feature", name))?;
        feature.archived_at = Some(Utc::now());
        Ok(())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}
