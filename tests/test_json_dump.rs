//! Tests for loading decoder page dumps and rendering results.
//!
//! Covers:
//! - JSON page dumps with both legacy annotation kind fields
//! - Decode failures surfacing as document errors
//! - Page retrieval failures aborting or being skipped
//! - Output converters over a real extraction result

use pdf_highlights::converters::{
    ClipboardConverter, HighlightConverter, LayoutConfig, PaginatedLayout, PlainTextConverter,
    TextExportConfig,
};
use pdf_highlights::error::{ErrorKind, USER_FACING_MESSAGE};
use pdf_highlights::{
    Annotation, DocumentLoader, Error, ExtractionConfig, ExtractionResult, HighlightPipeline,
    JsonDocumentLoader, PageErrorPolicy, PageSource, Result, TextFragment,
};
use std::io::Write;

const DUMP: &str = r#"{
  "pages": [
    {
      "annotations": [
        {"subtype": "Link", "rect": [0, 0, 600, 800]},
        {"subtype": "Highlight", "rect": [300, 715, 100, 700], "color": [1, 1, 0]}
      ],
      "items": [
        {"str": "Hello", "transform": [15, 0, 0, 15, 100, 700], "width": 50, "height": 15},
        {"str": "  ", "transform": [15, 0, 0, 15, 151, 700], "width": 3, "height": 15},
        {"str": "World", "transform": [15, 0, 0, 15, 155, 700], "width": 60, "height": 15}
      ]
    },
    {"annotations": [], "items": []},
    {
      "annotations": [
        {"type": "Highlight", "rect": [72, 500, 200, 512], "contents": "Copied by the reader"},
        {"type": "Underline", "rect": [72, 500, 200, 512]}
      ],
      "items": [
        {"str": "Ignored", "transform": [12, 0, 0, 12, 72, 500], "width": 40, "height": 12}
      ]
    }
  ]
}"#;

fn extract(json: &str) -> Result<ExtractionResult> {
    HighlightPipeline::new().extract_bytes(&JsonDocumentLoader::new(), json.as_bytes())
}

#[test]
fn test_dump_extraction() {
    let result = extract(DUMP).expect("extraction failed");

    assert_eq!(result.len(), 2);
    assert_eq!(result.highlights[0].text, "Hello World");
    assert_eq!(result.highlights[0].page, 1);
    assert_eq!(result.highlights[0].color.as_ref().map(|c| c.css()), Some("rgb(1,1,0)".to_string()));
    assert_eq!(result.highlights[1].text, "Copied by the reader");
    assert_eq!(result.highlights[1].page, 3);
    assert_eq!(result.summary.pages_scanned, 3);
    assert_eq!(result.summary.highlights_found, 2);
}

#[test]
fn test_dump_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(DUMP.as_bytes()).expect("write dump");

    let mut source = JsonDocumentLoader::new().open(file.path()).expect("open dump");
    assert_eq!(source.page_count().unwrap(), 3);
    let result = HighlightPipeline::new().extract(&mut source).expect("extraction failed");
    assert_eq!(result.len(), 2);
}

#[test]
fn test_invalid_dump_is_decode_error() {
    let err = extract("%PDF-1.4\n%garbage").unwrap_err();
    assert!(matches!(err, Error::DocumentDecode(_)));
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.user_message(), USER_FACING_MESSAGE);
}

#[test]
fn test_result_json_roundtrip() {
    let result = extract(DUMP).expect("extraction failed");
    let json = serde_json::to_string(&result).expect("serialize");
    assert!(json.contains("\"Hello World\""));
    assert!(json.contains("\"Spatial\""));
    let back: ExtractionResult = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, result);
}

/// Source that cannot read one page's annotations.
struct BrokenPage {
    broken: usize,
}

impl PageSource for BrokenPage {
    fn page_count(&mut self) -> Result<usize> {
        Ok(3)
    }

    fn annotations(&mut self, page: usize) -> Result<Vec<Annotation>> {
        if page == self.broken {
            return Err(Error::page_retrieval(page, "annotation array is not an array"));
        }
        Ok(vec![Annotation::highlight([0.0, 0.0, 1.0, 1.0]).with_contents(format!("page {}", page))])
    }

    fn text_fragments(&mut self, _page: usize) -> Result<Vec<TextFragment>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_page_failure_aborts_by_default() {
    let err = HighlightPipeline::new()
        .extract(&mut BrokenPage { broken: 2 })
        .unwrap_err();
    assert!(matches!(err, Error::PageRetrieval { page: 2, .. }));
    assert_eq!(err.kind(), ErrorKind::PageRetrieval);
}

#[test]
fn test_page_failure_skipped_when_configured() {
    let config = ExtractionConfig::new().with_page_error_policy(PageErrorPolicy::SkipPage);
    let result = HighlightPipeline::with_config(config)
        .extract(&mut BrokenPage { broken: 2 })
        .expect("extraction failed");
    let texts: Vec<&str> = result.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["page 1", "page 3"]);
    assert_eq!(result.summary.skipped_pages, vec![2]);
}

#[test]
fn test_converters_over_result() {
    let result = extract(DUMP).expect("extraction failed");

    let plain = PlainTextConverter::new(TextExportConfig::new("dump.json")).convert(&result);
    assert_eq!(
        plain,
        "EXTRACTED HIGHLIGHTS: dump.json\n\n[Page 1] Hello World\n\n---\n\n[Page 3] Copied by the reader"
    );

    let clipboard = ClipboardConverter::new().convert(&result);
    assert_eq!(clipboard, "Hello World\n\nCopied by the reader");

    let layout = PaginatedLayout::new(LayoutConfig::default())
        .with_document_name("dump.json")
        .layout(&result);
    assert_eq!(layout.pages.len(), 1);
    let labels: Vec<&str> = layout.pages[0]
        .lines
        .iter()
        .filter(|line| line.text.starts_with("PAGE"))
        .map(|line| line.text.as_str())
        .collect();
    assert_eq!(labels, vec!["PAGE 1:", "PAGE 3:"]);
}

#[test]
fn test_dump_with_marked_content_items() {
    let dump = r#"{"pages": [{
        "annotations": [{"subtype": "Highlight", "rect": [100, 700, 300, 715]}],
        "items": [
            {"type": "beginMarkedContent", "tag": "P"},
            {"str": "Hello", "transform": [15, 0, 0, 15, 100, 700], "width": 50, "height": 15},
            {"type": "beginMarkedContentProps", "tag": "Span", "id": "p1R_mc0"},
            {"str": "World", "transform": [15, 0, 0, 15, 155, 700], "width": 60, "height": 15},
            {"type": "endMarkedContent"},
            {"type": "endMarkedContent"}
        ]
    }]}"#;

    let result = extract(dump).expect("extraction failed");
    assert_eq!(result.len(), 1);
    assert_eq!(result.highlights[0].text, "Hello World");
}
