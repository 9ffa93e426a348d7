//! Paginated layout of extracted highlights.
//!
//! Produces a page-by-page line layout (title block, then a `PAGE N:` label
//! and word-wrapped body per highlight) that a document writer can draw
//! directly. Vertical positions grow downwards from the top margin, in the
//! writer's units. All layout parameters are configurable.

use super::HighlightConverter;
use crate::pipeline::ExtractionResult;
use serde::{Deserialize, Serialize};

/// Layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Left margin, also the first line's offset on every page
    pub margin: f64,
    /// Title of the first page
    pub title: String,
    /// Offset from the title to the source line
    pub title_advance: f64,
    /// Offset from the source line to the first entry
    pub source_advance: f64,
    /// A new page starts before a label placed below this offset
    pub label_break_y: f64,
    /// Offset from a label to its body
    pub label_advance: f64,
    /// Distance between body lines
    pub line_height: f64,
    /// A new page starts when a body would end below this offset
    pub body_break_y: f64,
    /// Gap after each entry's body
    pub entry_spacing: f64,
    /// Maximum body line width in characters
    pub wrap_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            title: "Extracted Highlights".to_string(),
            title_advance: 10.0,
            source_advance: 15.0,
            label_break_y: 270.0,
            label_advance: 6.0,
            line_height: 6.0,
            body_break_y: 280.0,
            entry_spacing: 12.0,
            wrap_width: 90,
        }
    }
}

impl LayoutConfig {
    /// Set the wrap width in characters (builder pattern).
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }

    /// Set both page-break thresholds (builder pattern).
    pub fn with_page_breaks(mut self, label_break_y: f64, body_break_y: f64) -> Self {
        self.label_break_y = label_break_y;
        self.body_break_y = body_break_y;
        self
    }
}

/// Role of a laid-out line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    /// Document title
    Title,
    /// Source document line
    Source,
    /// `PAGE N:` label
    Label,
    /// Highlight text
    Body,
}

/// One positioned line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Vertical offset from the top of the page
    pub y: f64,
    /// Role of the line
    pub style: LineStyle,
    /// Line text
    pub text: String,
}

/// One output page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Lines in drawing order
    pub lines: Vec<LayoutLine>,
}

/// Highlights laid out across pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedDocument {
    /// Pages, first page first
    pub pages: Vec<LayoutPage>,
}

impl PaginatedDocument {
    /// Render as plain text, pages separated by form feeds.
    pub fn to_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| {
                page.lines
                    .iter()
                    .map(|line| line.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\u{0C}\n")
    }
}

/// Lays out highlights onto pages.
#[derive(Debug, Clone, Default)]
pub struct PaginatedLayout {
    config: LayoutConfig,
    document_name: Option<String>,
}

impl PaginatedLayout {
    /// Create a layout with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            document_name: None,
        }
    }

    /// Show `Source: {name}` under the title (builder pattern).
    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    /// Lay out every highlight.
    pub fn layout(&self, result: &ExtractionResult) -> PaginatedDocument {
        let cfg = &self.config;
        let mut pages = vec![LayoutPage::default()];
        let mut y = cfg.margin;

        push_line(&mut pages, y, LineStyle::Title, cfg.title.clone());
        y += cfg.title_advance;
        if let Some(name) = &self.document_name {
            push_line(&mut pages, y, LineStyle::Source, format!("Source: {}", name));
            y += cfg.source_advance;
        }

        for highlight in result.iter() {
            if y > cfg.label_break_y {
                pages.push(LayoutPage::default());
                y = cfg.margin;
            }
            push_line(&mut pages, y, LineStyle::Label, format!("PAGE {}:", highlight.page));
            y += cfg.label_advance;

            let body = wrap_words(&highlight.text, cfg.wrap_width);
            let body_height = body.len() as f64 * cfg.line_height;
            if y + body_height > cfg.body_break_y {
                pages.push(LayoutPage::default());
                y = cfg.margin;
            }
            for (i, line) in body.into_iter().enumerate() {
                push_line(&mut pages, y + i as f64 * cfg.line_height, LineStyle::Body, line);
            }
            y += body_height + cfg.entry_spacing;
        }

        PaginatedDocument { pages }
    }
}

impl HighlightConverter for PaginatedLayout {
    fn convert(&self, result: &ExtractionResult) -> String {
        self.layout(result).to_text()
    }

    fn name(&self) -> &'static str {
        "Paginated"
    }
}

fn push_line(pages: &mut [LayoutPage], y: f64, style: LineStyle, text: String) {
    if let Some(page) = pages.last_mut() {
        page.lines.push(LayoutLine { y, style, text });
    }
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Words longer than `width` are split across lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }

        let word_len = chars.len();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
