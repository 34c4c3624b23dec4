//! fft - feature toggle transfer CLI
//!
//! # Examples
//!
//! ```bash
//! # Export two features from production
//! fft export --environment production --features checkout,search --output snapshot.json
//!
//! # Check what an import would do
//! fft validate --file snapshot.json --environment staging --pretty
//!
//! # Apply it
//! fft import --file snapshot.json --environment staging
//! ```

use ff_cli::{Cli, CliResult, dispatch, logger};
use ff_config::Config;
use ff_core::User;
use ff_store::MemoryBackend;
use ff_transfer::{ExportImportService, TransferContext};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting fft v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state_path = match cli.state {
        Some(path) => path,
        None => config.state_path()?,
    };
    info!("Loading state: {}", state_path.display());

    let backend = Arc::new(MemoryBackend::load(&state_path).await?);
    let service = ExportImportService::new(TransferContext::from_backend(
        backend.clone(),
        &config.transfer,
    ));
    let user = User::new(&cli.user);

    let read_only = cli.command.is_read_only();
    let value = dispatch(&service, cli.command, &user).await?;

    if !read_only {
        backend.save(&state_path).await?;
        info!("State saved: {}", state_path.display());
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(())
}
