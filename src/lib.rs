// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Highlights
//!
//! Recovers the text covered by highlight annotations in a decoded PDF.
//!
//! A highlight annotation stores only a rectangle (and sometimes the text an
//! authoring tool copied into it). The text it marks lives in the page content
//! stream as positioned fragments. This crate correlates the two:
//!
//! 1. **Embedded contents** of the annotation win when present.
//! 2. Otherwise every text fragment whose box **overlaps** the annotation
//!    rectangle is joined in decoder order and whitespace-normalized.
//! 3. Otherwise a fixed **fallback** text marks the highlight as unreadable.
//!
//! Decoding PDF bytes is delegated to an external decoder behind the
//! [`document::PageSource`] / [`document::DocumentLoader`] traits. A JSON page
//! dump loader is included.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_highlights::annotations::Annotation;
//! use pdf_highlights::document::{MemoryDocument, PageContent};
//! use pdf_highlights::geometry::Point;
//! use pdf_highlights::layout::TextFragment;
//! use pdf_highlights::pipeline::HighlightPipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = MemoryDocument::new().with_page(PageContent::new(
//!     vec![Annotation::highlight([100.0, 700.0, 300.0, 715.0])],
//!     vec![
//!         TextFragment::new("Hello", Point::new(100.0, 700.0), 50.0, 15.0),
//!         TextFragment::new("World", Point::new(155.0, 700.0), 60.0, 15.0),
//!     ],
//! ));
//!
//! let result = HighlightPipeline::new().extract(&mut doc)?;
//! assert_eq!(result.highlights[0].text, "Hello World");
//! assert_eq!(result.highlights[0].page, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and page text
pub mod geometry;
pub mod layout;

// Annotations
/// Annotation kinds and colors per PDF spec
pub mod annotation_types;
pub mod annotations;

// Decoder boundary
pub mod document;

// Correlation
pub mod extractors;

// Document walking
pub mod pipeline;

// Output formats
pub mod converters;

// Re-exports
pub use annotations::Annotation;
pub use config::{ExtractionConfig, PageErrorPolicy, FALLBACK_TEXT};
pub use document::{DocumentLoader, JsonDocumentLoader, MemoryDocument, PageContent, PageSource};
pub use error::{Error, Result};
pub use extractors::{ExtractedHighlight, HighlightCorrelator, TextSource};
pub use geometry::{overlaps, Point, Rect};
pub use layout::TextFragment;
pub use pipeline::{ExtractionResult, ExtractionSummary, HighlightPipeline};

/// Extract every highlight from a decoded document with default settings.
///
/// Convenience wrapper around [`HighlightPipeline::extract`].
pub fn extract_highlights<S: PageSource + ?Sized>(source: &mut S) -> Result<ExtractionResult> {
    HighlightPipeline::new().extract(source)
}
