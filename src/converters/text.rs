//! Plain-text and clipboard renderings of extracted highlights.

use super::HighlightConverter;
use crate::pipeline::ExtractionResult;

/// Default separator placed between plain-text entries.
pub const DEFAULT_ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Configuration for plain-text export.
#[derive(Debug, Clone, PartialEq)]
pub struct TextExportConfig {
    /// Document name shown in the title line
    pub document_name: String,
    /// Text placed between entries
    pub separator: String,
}

impl Default for TextExportConfig {
    fn default() -> Self {
        Self {
            document_name: String::new(),
            separator: DEFAULT_ENTRY_SEPARATOR.to_string(),
        }
    }
}

impl TextExportConfig {
    /// Create a configuration for the named document.
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            ..Default::default()
        }
    }

    /// Set the entry separator (builder pattern).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Renders `[Page N] text` entries under a title line.
#[derive(Debug, Clone, Default)]
pub struct PlainTextConverter {
    config: TextExportConfig,
}

impl PlainTextConverter {
    /// Create a converter with the given configuration.
    pub fn new(config: TextExportConfig) -> Self {
        Self { config }
    }
}

impl HighlightConverter for PlainTextConverter {
    fn convert(&self, result: &ExtractionResult) -> String {
        let entries: Vec<String> = result
            .iter()
            .map(|h| format!("[Page {}] {}", h.page, h.text))
            .collect();
        format!(
            "EXTRACTED HIGHLIGHTS: {}\n\n{}",
            self.config.document_name,
            entries.join(&self.config.separator)
        )
    }

    fn name(&self) -> &'static str {
        "PlainText"
    }
}

/// Joins highlight texts with blank lines, without labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardConverter;

impl ClipboardConverter {
    /// Create a converter.
    pub fn new() -> Self {
        Self
    }
}

impl HighlightConverter for ClipboardConverter {
    fn convert(&self, result: &ExtractionResult) -> String {
        result
            .iter()
            .map(|h| h.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn name(&self) -> &'static str {
        "Clipboard"
    }
}
