use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Dry run an import and print the validation report
    Validate {
        /// Exported snapshot to check
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "default")]
        project: String,

        #[arg(short, long)]
        environment: String,
    },

    /// Import an exported snapshot into a project environment
    Import {
        /// Exported snapshot to apply
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "default")]
        project: String,

        #[arg(short, long)]
        environment: String,
    },

    /// Export features of one environment
    Export {
        #[arg(short, long)]
        environment: String,

        /// Comma-separated feature names
        #[arg(long, value_delimiter = ',')]
        features: Option<Vec<String>>,

        /// Export every feature carrying this tag value (wins over --features)
        #[arg(short, long)]
        tag: Option<String>,

        /// Optional output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Whether the command changes the state file.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Validate { .. })
    }
}
