use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fft")]
#[command(about = "Validate, import and export feature toggle configuration")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// State file (defaults to the configured store.state_file)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Acting user, recorded on audit events
    #[arg(long, global = true, default_value = "admin")]
    pub user: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
