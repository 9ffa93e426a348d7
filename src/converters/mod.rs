//! Output formats for extracted highlights.
//!
//! - **Plain text**: `[Page N] text` entries under a title line
//! - **Clipboard**: highlight texts separated by blank lines
//! - **Paginated**: a page-by-page line layout for document writers
//!
//! The [`whitespace`] module also hosts the fragment assembler used during
//! extraction.
//!
//! # Examples
//!
//! ```
//! use pdf_highlights::converters::{ClipboardConverter, HighlightConverter};
//! use pdf_highlights::pipeline::ExtractionResult;
//!
//! let text = ClipboardConverter::new().convert(&ExtractionResult::default());
//! assert!(text.is_empty());
//! ```

pub mod paginated;
pub mod text;
pub mod whitespace;

// Re-export main types
pub use paginated::{
    LayoutConfig, LayoutLine, LayoutPage, LineStyle, PaginatedDocument, PaginatedLayout,
    wrap_words,
};
pub use text::{ClipboardConverter, PlainTextConverter, TextExportConfig};
pub use whitespace::{assemble_fragments, collapse_whitespace};

use crate::pipeline::ExtractionResult;

/// Renders an [`ExtractionResult`] to a string.
pub trait HighlightConverter {
    /// Render every highlight.
    fn convert(&self, result: &ExtractionResult) -> String;

    /// Short name of the format.
    fn name(&self) -> &'static str;
}
