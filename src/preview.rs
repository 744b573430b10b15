use crate::models::{FileContent, FileKind};

/// Produce the display form of a file's text. JSON is pretty-printed when it
/// parses; anything that fails to parse (and all CSV) is shown verbatim.
/// Never fails.
pub fn format_content(content: &str, kind: FileKind) -> String {
    match kind {
        FileKind::Json => match serde_json::from_str::<serde_json::Value>(content) {
            Ok(value) => serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| content.to_string()),
            Err(_) => content.to_string(),
        },
        FileKind::Csv => content.to_string(),
    }
}

/// Titled preview block for terminal display.
pub fn render_preview(file: &FileContent) -> String {
    format!(
        "{} ({} file)\n{}",
        file.name,
        file.kind.label(),
        format_content(&file.content, file.kind)
    )
}
