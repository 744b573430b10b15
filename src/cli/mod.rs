pub mod config;
pub mod ping;
pub mod preview;
pub mod process;
pub mod records;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::FileKind;

#[derive(Parser)]
#[command(name = "tally", about = "Terminal client for a bank-transaction classification service.")]
pub struct Cli {
    /// Service origin, e.g. http://localhost:8080 (overrides TALLY_API_URL
    /// and settings.json)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the classification service is reachable.
    Ping,
    /// Upload a bank transactions CSV and a rules JSON for classification.
    Process {
        /// Path to the bank transactions CSV
        bank: String,
        /// Path to the classification rules JSON
        #[arg(long)]
        rules: String,
        /// Print both file previews before submitting
        #[arg(long)]
        preview: bool,
    },
    /// Look up stored transactions for a company.
    Records {
        /// Company ID to query
        company_id: String,
    },
    /// Show or set the configured service origin.
    Config {
        /// New origin to persist, e.g. http://app:8080
        url: Option<String>,
    },
    /// Show a formatted preview of a CSV or JSON file.
    Preview {
        /// Path to the file
        file: String,
        /// Declared file kind (default: inferred from the extension)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Csv,
    Json,
}

impl From<KindArg> for FileKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Csv => FileKind::Csv,
            KindArg::Json => FileKind::Json,
        }
    }
}
