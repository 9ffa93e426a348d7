//! Document-level highlight extraction.
//!
//! ```text
//! DocumentLoader (bytes → PageSource)
//!     ↓
//! [HighlightPipeline] (pages 1..=N, strictly in order)
//!     ↓  per page: annotations + text fragments
//! [HighlightCorrelator] → ExtractedHighlight[]
//!     ↓
//! ExtractionResult (page order, then annotation order)
//! ```
//!
//! Pages are independent and hold no shared state; they are walked
//! sequentially so the output order is page-ascending by construction.

use crate::config::{ExtractionConfig, PageErrorPolicy};
use crate::document::{DocumentLoader, PageSource};
use crate::error::{Error, Result};
use crate::extractors::{ExtractedHighlight, HighlightCorrelator};
use crate::layout::collect_fragments;
use serde::{Deserialize, Serialize};

/// Counts gathered while walking a document. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Pages in the document
    pub pages_scanned: usize,
    /// Highlights emitted
    pub highlights_found: usize,
    /// Pages whose retrieval failed under [`PageErrorPolicy::SkipPage`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_pages: Vec<usize>,
}

impl ExtractionSummary {
    /// Human-readable one-line summary.
    pub fn message(&self) -> String {
        let mut message = format!(
            "Local analysis complete. Scanned {} pages and found {} highlights using spatial coordinate mapping.",
            self.pages_scanned, self.highlights_found
        );
        if !self.skipped_pages.is_empty() {
            let pages: Vec<String> = self.skipped_pages.iter().map(|p| p.to_string()).collect();
            message.push_str(&format!(" Skipped unreadable pages: {}.", pages.join(", ")));
        }
        message
    }
}

/// Highlights of a whole document, in page order then annotation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted highlights
    pub highlights: Vec<ExtractedHighlight>,
    /// Walk statistics
    pub summary: ExtractionSummary,
}

impl ExtractionResult {
    /// Number of highlights.
    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    /// Whether no highlights were found.
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }

    /// Iterate over the highlights in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedHighlight> {
        self.highlights.iter()
    }
}

/// Walks a document's pages and correlates each page's highlights.
#[derive(Debug, Clone, Default)]
pub struct HighlightPipeline {
    config: ExtractionConfig,
    correlator: HighlightCorrelator,
}

impl HighlightPipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        let correlator = HighlightCorrelator::with_config(&config);
        Self { config, correlator }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Decode `bytes` with `loader` and extract every highlight.
    pub fn extract_bytes<L: DocumentLoader>(
        &self,
        loader: &L,
        bytes: &[u8],
    ) -> Result<ExtractionResult> {
        let mut source = loader.load(bytes)?;
        self.extract(&mut source)
    }

    /// Extract every highlight of a document.
    ///
    /// Under [`PageErrorPolicy::Abort`] the first page that fails retrieval
    /// ends the walk with that error and no partial result.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::annotations::Annotation;
    /// use pdf_highlights::document::{MemoryDocument, PageContent};
    /// use pdf_highlights::pipeline::HighlightPipeline;
    ///
    /// let mut doc = MemoryDocument::new().with_page(PageContent::new(
    ///     vec![Annotation::highlight([0.0, 0.0, 10.0, 10.0]).with_contents("Noted")],
    ///     vec![],
    /// ));
    /// let result = HighlightPipeline::new().extract(&mut doc)?;
    /// assert_eq!(result.highlights[0].text, "Noted");
    /// assert_eq!(result.summary.pages_scanned, 1);
    /// # Ok::<(), pdf_highlights::error::Error>(())
    /// ```
    pub fn extract<S: PageSource + ?Sized>(&self, source: &mut S) -> Result<ExtractionResult> {
        let page_count = source.page_count()?;
        log::info!("Extracting highlights from {} pages", page_count);

        let mut result = ExtractionResult::default();
        for page in 1..=page_count {
            match self.extract_page(source, page) {
                Ok(highlights) => result.highlights.extend(highlights),
                Err(e) => match self.config.page_error_policy {
                    PageErrorPolicy::Abort => return Err(e),
                    PageErrorPolicy::SkipPage => {
                        log::warn!("Skipping page {}: {}", page, e);
                        result.summary.skipped_pages.push(page);
                    },
                },
            }
        }

        result.summary.pages_scanned = page_count;
        result.summary.highlights_found = result.highlights.len();
        log::info!("{}", result.summary.message());
        Ok(result)
    }

    /// Extract the highlights of a single 1-based page.
    ///
    /// Both annotations and text are retrieved for every page, so a page
    /// with an unreadable text layer fails even when it has no highlights.
    pub fn extract_page<S: PageSource + ?Sized>(
        &self,
        source: &mut S,
        page: usize,
    ) -> Result<Vec<ExtractedHighlight>> {
        let annotations = source
            .annotations(page)
            .map_err(|e| as_page_error(page, e))?;
        let fragments = source
            .text_fragments(page)
            .map_err(|e| as_page_error(page, e))?;

        if !annotations.iter().any(|annot| annot.subtype.is_highlight()) {
            log::debug!("Page {}: no highlight annotations", page);
            return Ok(Vec::new());
        }

        let fragments = collect_fragments(fragments);
        Ok(self.correlator.correlate_page(page, &annotations, &fragments))
    }
}

/// Report any retrieval failure as a page failure, keeping existing page errors.
fn as_page_error(page: usize, err: Error) -> Error {
    match err {
        Error::PageRetrieval { .. } | Error::InvalidPage { .. } => err,
        other => Error::page_retrieval(page, other),
    }
}
