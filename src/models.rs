use std::path::Path;

use serde::{Deserialize, Serialize};

/// Caller-declared logical type of an uploaded file. Never sniffed from
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Json,
}

impl FileKind {
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Csv => "CSV",
            FileKind::Json => "JSON",
        }
    }

    /// Map a file extension to a kind, for commands that accept either.
    pub fn from_extension(path: &Path) -> Option<FileKind> {
        match path.extension()?.to_str()? {
            "csv" => Some(FileKind::Csv),
            "json" => Some(FileKind::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// In-memory decoded text of an uploaded file plus its declared kind.
/// Held transiently while a command runs; never persisted.
#[derive(Debug, Clone)]
pub struct FileContent {
    pub name: String,
    pub content: String,
    pub kind: FileKind,
}

/// Summary returned by the service after classifying a submitted batch.
/// `classified_count + unclassified_count` is expected to equal
/// `total_processed`, but that is the service's invariant, not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub total_processed: i64,
    pub classified_count: i64,
    pub unclassified_count: i64,
    pub message: String,
}

/// A stored transaction as returned by the records query. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub transaction_date: String,
    pub description: String,
    pub amount: f64,
    pub transaction_type: String,
    pub company_id: String,
    pub company_name: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub is_classified: bool,
}
