//! Text extraction from PDF page annotations.

pub mod highlights;

// Re-export main types
pub use highlights::{ExtractedHighlight, HighlightCorrelator, TextSource, covered_text};
