use crate::commands::Commands;
use crate::error::{CliError, Result as CliResult};

use ff_core::{ExportQuery, User};
use ff_transfer::ExportImportService;

use log::info;
use serde_json::{Value, json};

/// Runs one command against `service` and returns its JSON result.
pub async fn dispatch(
    service: &ExportImportService,
    command: Commands,
    user: &User,
) -> CliResult<Value> {
    match command {
        Commands::Validate {
            file,
            project,
            environment,
        } => {
            let payload = ExportImportService::read_payload(&file, &project, &environment).await?;
            let report = service.validate(&payload, user).await?;
            if report.has_missing_permissions() {
                info!("{} lacks permissions to import {}", user.username, file.display());
            }

            let mut value = serde_json::to_value(&report)?;
            value["importable"] = json!(report.is_importable());
            Ok(value)
        }

        Commands::Import {
            file,
            project,
            environment,
        } => {
            service
                .import_from_file(&file, &project, &environment, user)
                .await?;
            Ok(json!({
                "imported": file.display().to_string(),
                "project": project,
                "environment": environment,
            }))
        }

        Commands::Export {
            environment,
            features,
            tag,
            output,
        } => {
            let query = ExportQuery {
                environment,
                features,
                tag,
                download_file: output.is_some(),
            };
            let snapshot = service.export(&query, user).await?;

            let Some(path) = output else {
                return Ok(serde_json::to_value(&snapshot)?);
            };

            let contents = serde_json::to_string_pretty(&snapshot)?;
            tokio::fs::write(&path, contents)
                .await
                .map_err(|e| CliError::io(&path, e))?;
            info!("Wrote export to {}", path.display());

            Ok(json!({
                "output": path.display().to_string(),
                "features": snapshot.features.len(),
            }))
        }
    }
}
