use crate::{TransferContext, TransferError, TransferResult, exporter, importer, validator};

use ff_core::{ExportQuery, ExportSnapshot, ImportPayload, TransferData, User, ValidationReport};

use std::path::Path;

use log::info;

/// Entry point for validating, importing and exporting feature configuration.
#[derive(Clone)]
pub struct ExportImportService {
    ctx: TransferContext,
}

impl ExportImportService {
    pub fn new(ctx: TransferContext) -> Self {
        Self { ctx }
    }

    /// Dry run of an import. Problems are reported, never raised.
    pub async fn validate(
        &self,
        payload: &ImportPayload,
        user: &User,
    ) -> TransferResult<ValidationReport> {
        validator::validate(&self.ctx, payload, user).await
    }

    pub async fn import(&self, payload: &ImportPayload, user: &User) -> TransferResult<()> {
        importer::apply(&self.ctx, payload, user).await?;

        let names = payload.feature_names();
        info!(
            "{} imported {} features into {}/{}: {}",
            user.username,
            names.len(),
            payload.project,
            payload.environment,
            names.join(", ")
        );
        Ok(())
    }

    pub async fn export(&self, query: &ExportQuery, user: &User) -> TransferResult<ExportSnapshot> {
        let snapshot = exporter::export(&self.ctx, query, user).await?;

        info!(
            "{} exported {} features from {}",
            user.username,
            snapshot.features.len(),
            query.environment
        );
        Ok(snapshot)
    }

    /// Imports a previously exported snapshot read from `path`.
    pub async fn import_from_file(
        &self,
        path: &Path,
        project: &str,
        environment: &str,
        user: &User,
    ) -> TransferResult<()> {
        let payload = Self::read_payload(path, project, environment).await?;
        self.import(&payload, user).await
    }

    /// Reads an exported snapshot and targets it at `project` / `environment`.
    pub async fn read_payload(
        path: &Path,
        project: &str,
        environment: &str,
    ) -> TransferResult<ImportPayload> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TransferError::io(path, e))?;
        let data: TransferData = serde_json::from_str(&contents)?;

        Ok(ImportPayload::new(project, environment, data))
    }
}
