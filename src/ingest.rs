use std::path::Path;

use crate::error::Result;
use crate::models::{FileContent, FileKind};

/// Read a user-chosen file into memory as text, tagged with its declared
/// kind. The kind is whatever the caller says it is; no sniffing. No size
/// limit is applied.
pub fn read_file(path: &Path, kind: FileKind) -> Result<FileContent> {
    log::debug!("reading {} as {kind}", path.display());
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let content = std::fs::read_to_string(path)?;
    Ok(FileContent { name, content, kind })
}
