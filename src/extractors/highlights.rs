//! Highlight-to-text correlation for a single page.
//!
//! A highlight annotation records only a region; the text it covers lives in
//! the page content stream. For each highlight the correlator picks the first
//! strategy that yields text:
//!
//! 1. **Embedded**: the annotation's own Contents entry, when not blank.
//! 2. **Spatial**: every text fragment whose box overlaps the annotation
//!    rectangle, joined in fragment order and whitespace-normalized.
//! 3. **Fallback**: a fixed placeholder, so a highlight mark is never dropped.
//!
//! Annotations of any other kind produce nothing.

use crate::annotation_types::AnnotationColor;
use crate::annotations::Annotation;
use crate::config::{ExtractionConfig, FALLBACK_TEXT};
use crate::converters::whitespace::assemble_fragments;
use crate::geometry::overlaps;
use crate::layout::TextFragment;
use serde::{Deserialize, Serialize};

/// Which strategy produced a highlight's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    /// Taken verbatim from the annotation contents
    Embedded,
    /// Reassembled from overlapping text fragments
    Spatial,
    /// No text could be recovered; the fallback placeholder was used
    Fallback,
}

/// Text recovered for one highlight annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedHighlight {
    /// Highlighted text, never empty
    pub text: String,
    /// 1-based page number
    pub page: usize,
    /// Annotation color, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<AnnotationColor>,
    /// Strategy that produced `text`
    pub source: TextSource,
}

/// Correlates a page's highlight annotations with its text fragments.
#[derive(Debug, Clone)]
pub struct HighlightCorrelator {
    fallback_text: String,
}

impl Default for HighlightCorrelator {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightCorrelator {
    /// Create a correlator using the default fallback text.
    pub fn new() -> Self {
        Self {
            fallback_text: FALLBACK_TEXT.to_string(),
        }
    }

    /// Create a correlator from an extraction configuration.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            fallback_text: config.fallback_text.clone(),
        }
    }

    /// Extract the text of every highlight on one page.
    ///
    /// Output follows annotation order. `fragments` must already exclude
    /// blank fragments (see [`crate::layout::collect_fragments`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::annotations::Annotation;
    /// use pdf_highlights::extractors::HighlightCorrelator;
    /// use pdf_highlights::geometry::Point;
    /// use pdf_highlights::layout::TextFragment;
    ///
    /// let annotations = vec![Annotation::highlight([100.0, 700.0, 300.0, 715.0])];
    /// let fragments = vec![
    ///     TextFragment::new("Hello", Point::new(100.0, 700.0), 50.0, 15.0),
    ///     TextFragment::new("World", Point::new(155.0, 700.0), 60.0, 15.0),
    /// ];
    ///
    /// let highlights = HighlightCorrelator::new().correlate_page(1, &annotations, &fragments);
    /// assert_eq!(highlights.len(), 1);
    /// assert_eq!(highlights[0].text, "Hello World");
    /// ```
    pub fn correlate_page(
        &self,
        page: usize,
        annotations: &[Annotation],
        fragments: &[TextFragment],
    ) -> Vec<ExtractedHighlight> {
        let highlights: Vec<ExtractedHighlight> = annotations
            .iter()
            .filter_map(|annot| self.correlate(page, annot, fragments))
            .collect();

        log::debug!(
            "Page {}: {} annotations, {} fragments, {} highlights",
            page,
            annotations.len(),
            fragments.len(),
            highlights.len()
        );
        highlights
    }

    /// Extract the text of a single annotation, or `None` if it is not a highlight.
    pub fn correlate(
        &self,
        page: usize,
        annotation: &Annotation,
        fragments: &[TextFragment],
    ) -> Option<ExtractedHighlight> {
        if !annotation.subtype.is_highlight() {
            return None;
        }

        let (text, source) = match annotation.embedded_text() {
            Some(contents) => (contents.to_string(), TextSource::Embedded),
            None => {
                let covered = covered_text(&annotation.rect, fragments);
                if covered.is_empty() {
                    (self.fallback_text.clone(), TextSource::Fallback)
                } else {
                    (covered, TextSource::Spatial)
                }
            },
        };

        log::trace!("Page {}: highlight {:?} resolved via {:?}", page, annotation.rect, source);

        Some(ExtractedHighlight {
            text,
            page,
            color: annotation.color.clone(),
            source,
        })
    }
}

/// Text of every fragment overlapping `rect`, joined in fragment order.
///
/// Returns an empty string when nothing overlaps.
pub fn covered_text(rect: &[f64; 4], fragments: &[TextFragment]) -> String {
    let matched: Vec<&str> = fragments
        .iter()
        .filter(|fragment| overlaps(rect, &fragment.bbox()))
        .map(|fragment| fragment.content.as_str())
        .collect();
    assemble_fragments(&matched)
}
