use std::path::PathBuf;

use crate::error::{Result, TallyError};
use crate::ingest::read_file;
use crate::models::FileKind;
use crate::preview::render_preview;

pub fn run(file: &str, kind: Option<FileKind>) -> Result<()> {
    let path = PathBuf::from(file);
    let kind = kind
        .or_else(|| FileKind::from_extension(&path))
        .ok_or_else(|| TallyError::UnknownFileKind(file.to_string()))?;
    let content = read_file(&path, kind)?;
    println!("{}", render_preview(&content));
    Ok(())
}
