//! Document sources: the boundary between a PDF decoder and the extractor.
//!
//! Decoding PDF bytes is not this crate's job. A decoder exposes a document
//! through [`PageSource`] (per-page annotations and text fragments, already
//! decoded) and is opened through a [`DocumentLoader`]. Any process-wide setup
//! a decoder needs belongs in its loader, before the first `load` call.
//!
//! Two implementations ship with the crate:
//! - [`MemoryDocument`], built directly from in-memory pages;
//! - [`JsonDocumentLoader`], which reads a JSON page dump produced by an
//!   external decoder.
//!
//! # Example
//!
//! ```
//! use pdf_highlights::document::{DocumentLoader, JsonDocumentLoader, PageSource};
//!
//! let dump = br#"{"pages": [{"annotations": [], "items": []}]}"#;
//! let mut doc = JsonDocumentLoader::new().load(dump)?;
//! assert_eq!(doc.page_count()?, 1);
//! # Ok::<(), pdf_highlights::error::Error>(())
//! ```

use crate::annotations::{Annotation, RawAnnotation};
use crate::error::{Error, Result};
use crate::layout::{RawTextItem, TextFragment};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-page access to decoded annotations and text.
///
/// Page numbers are 1-based. Retrieval takes `&mut self` because decoders
/// commonly cache objects as they resolve them.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&mut self) -> Result<usize>;

    /// Annotations of `page`, in the decoder's order.
    fn annotations(&mut self, page: usize) -> Result<Vec<Annotation>>;

    /// Text fragments of `page`, in the decoder's order.
    fn text_fragments(&mut self, page: usize) -> Result<Vec<TextFragment>>;
}

/// Opens raw document bytes as a [`PageSource`].
pub trait DocumentLoader {
    /// Source type produced by this loader.
    type Source: PageSource;

    /// Decode a document held in memory.
    ///
    /// Fails with [`Error::DocumentDecode`] when the bytes are not a readable document.
    fn load(&self, bytes: &[u8]) -> Result<Self::Source>;

    /// Read and decode a document from disk.
    fn open(&self, path: impl AsRef<Path>) -> Result<Self::Source>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path.as_ref())?;
        self.load(&bytes)
    }
}

/// Decoded content of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Annotations in decoder order
    pub annotations: Vec<Annotation>,
    /// Text fragments in decoder order
    pub fragments: Vec<TextFragment>,
}

impl PageContent {
    /// Create a page from its annotations and fragments.
    pub fn new(annotations: Vec<Annotation>, fragments: Vec<TextFragment>) -> Self {
        Self {
            annotations,
            fragments,
        }
    }
}

/// A fully decoded document held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocument {
    pages: Vec<PageContent>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from pages, first page first.
    pub fn from_pages(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }

    /// Append a page (builder pattern).
    pub fn with_page(mut self, page: PageContent) -> Self {
        self.pages.push(page);
        self
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn page(&self, page: usize) -> Result<&PageContent> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .ok_or_else(|| Error::InvalidPage {
                page,
                page_count: self.pages.len(),
            })
    }
}

impl PageSource for MemoryDocument {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn annotations(&mut self, page: usize) -> Result<Vec<Annotation>> {
        Ok(self.page(page)?.annotations.clone())
    }

    fn text_fragments(&mut self, page: usize) -> Result<Vec<TextFragment>> {
        Ok(self.page(page)?.fragments.clone())
    }
}

/// One page of a JSON page dump, in decoder-native field layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    /// Annotation records
    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,
    /// Text content items
    #[serde(default)]
    pub items: Vec<RawTextItem>,
}

/// JSON page dump: `{ "pages": [ { "annotations": [...], "items": [...] } ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDump {
    /// Pages, first page first
    pub pages: Vec<RawPage>,
}

impl From<PageDump> for MemoryDocument {
    fn from(dump: PageDump) -> Self {
        let pages = dump
            .pages
            .into_iter()
            .map(|raw| {
                PageContent::new(
                    raw.annotations.into_iter().map(RawAnnotation::resolve).collect(),
                    raw.items.into_iter().filter_map(RawTextItem::into_fragment).collect(),
                )
            })
            .collect();
        MemoryDocument::from_pages(pages)
    }
}

/// Loads JSON page dumps into a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentLoader;

impl JsonDocumentLoader {
    /// Create a loader.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for JsonDocumentLoader {
    type Source = MemoryDocument;

    fn load(&self, bytes: &[u8]) -> Result<MemoryDocument> {
        let dump: PageDump =
            serde_json::from_slice(bytes).map_err(|e| Error::DocumentDecode(e.to_string()))?;
        log::debug!("Loaded page dump with {} pages", dump.pages.len());
        Ok(dump.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation_types::AnnotationSubtype;
    use crate::error::ErrorKind;
    use crate::geometry::Point;

    fn two_pages() -> MemoryDocument {
        MemoryDocument::new()
            .with_page(PageContent::new(
                vec![Annotation::highlight([0.0, 0.0, 10.0, 10.0])],
                vec![TextFragment::new("one", Point::new(1.0, 1.0), 5.0, 5.0)],
            ))
            .with_page(PageContent::default())
    }

    #[test]
    fn test_memory_document_pages_are_one_based() {
        let mut doc = two_pages();
        assert_eq!(doc.page_count().unwrap(), 2);
        assert_eq!(doc.annotations(1).unwrap().len(), 1);
        assert_eq!(doc.text_fragments(1).unwrap()[0].content, "one");
        assert!(doc.annotations(2).unwrap().is_empty());
    }

    #[test]
    fn test_memory_document_out_of_range() {
        let mut doc = two_pages();
        let err = doc.annotations(0).unwrap_err();
        assert!(matches!(err, Error::InvalidPage { page: 0, page_count: 2 }));
        let err = doc.text_fragments(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PageRetrieval);
    }

    #[test]
    fn test_json_loader_resolves_records() {
        let json = br#"{
            "pages": [
                {
                    "annotations": [
                        {"subtype": "Highlight", "rect": [100, 700, 300, 715], "color": [255, 255, 0]},
                        {"type": "Underline", "rect": [0, 0, 1, 1]}
                    ],
                    "items": [
                        {"str": "Hello", "transform": [1, 0, 0, 1, 100, 700], "width": 50, "height": 15}
                    ]
                },
                {}
            ]
        }"#;
        let mut doc = JsonDocumentLoader::new().load(json).unwrap();
        assert_eq!(doc.page_count().unwrap(), 2);

        let annots = doc.annotations(1).unwrap();
        assert_eq!(annots[0].subtype, AnnotationSubtype::Highlight);
        assert_eq!(annots[1].subtype, AnnotationSubtype::Underline);

        let fragments = doc.text_fragments(1).unwrap();
        assert_eq!(fragments[0].origin, Point::new(100.0, 700.0));
        assert!(doc.annotations(2).unwrap().is_empty());
    }

    #[test]
    fn test_json_loader_decode_error() {
        let err = JsonDocumentLoader::new().load(b"%PDF-1.7 not json").unwrap_err();
        assert!(matches!(err, Error::DocumentDecode(_)));

        let err = JsonDocumentLoader::new().load(br#"{"pages": 3}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_json_loader_open_missing_file() {
        let err = JsonDocumentLoader::new()
            .open("/nonexistent/highlights.json")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
