//! Output formats for rendered rows

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// How rendered rows are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Rows joined by newlines
    #[default]
    Plain,
    /// Plain text inside a code fence so chat apps keep the spacing
    Chat,
    /// JSON array of rows
    Json,
}

impl ExportFormat {
    /// Get all available formats
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Plain, ExportFormat::Chat, ExportFormat::Json]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Plain => "Plain",
            ExportFormat::Chat => "Chat",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Format `lines` as a single string
pub fn export(lines: &[String], format: ExportFormat) -> Result<String> {
    let text = match format {
        ExportFormat::Plain => lines.join("\n"),
        ExportFormat::Chat => format!("```\n{}\n```", lines.join("\n")),
        ExportFormat::Json => serde_json::to_string_pretty(lines)?,
    };
    Ok(text)
}

/// Write the export of `lines` followed by a newline
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String], format: ExportFormat) -> Result<()> {
    let text = export(lines, format)?;
    writeln!(writer, "{}", text)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<String> {
        vec!["//  //".to_string(), String::new(), " ==== ".to_string()]
    }

    #[test]
    fn test_plain() {
        assert_eq!(export(&rows(), ExportFormat::Plain).unwrap(), "//  //\n\n ==== ");
    }

    #[test]
    fn test_chat_fence() {
        assert_eq!(
            export(&rows(), ExportFormat::Chat).unwrap(),
            "```\n//  //\n\n ==== \n```"
        );
    }

    #[test]
    fn test_json() {
        let text = export(&rows(), ExportFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, rows());
    }

    #[test]
    fn test_write_lines() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &rows(), ExportFormat::Plain).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "//  //\n\n ==== \n");
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::all().len(), 3);
        assert_eq!(ExportFormat::Json.name(), "JSON");
    }
}
