//! Positioned text fragments.
//!
//! A fragment is one already-shaped run of glyphs from a page's content
//! stream, anchored at its baseline origin. Decoders report fragments as
//! [`RawTextItem`]s carrying the full text matrix; only the translation part
//! of the matrix positions the fragment.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One positioned run of text on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text of the run
    pub content: String,
    /// Baseline anchor in page space
    pub origin: Point,
    /// Horizontal extent from `origin`
    pub width: f64,
    /// Vertical extent from `origin`
    pub height: f64,
}

impl TextFragment {
    /// Create a fragment.
    pub fn new(content: impl Into<String>, origin: Point, width: f64, height: f64) -> Self {
        Self {
            content: content.into(),
            origin,
            width,
            height,
        }
    }

    /// Bounding box `[origin.x, origin.y, origin.x + width, origin.y + height]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Point;
    /// use pdf_highlights::layout::TextFragment;
    ///
    /// let fragment = TextFragment::new("Hello", Point::new(100.0, 700.0), 50.0, 15.0);
    /// let bbox = fragment.bbox();
    /// assert_eq!(bbox.max_x(), 150.0);
    /// assert_eq!(bbox.max_y(), 715.0);
    /// ```
    pub fn bbox(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    /// Whether the fragment carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Text item as emitted by a document decoder.
///
/// `transform` is the text rendering matrix `[a, b, c, d, e, f]`; the origin
/// is its translation `(e, f)`. Marked-content markers such as
/// `{"type": "beginMarkedContent", "tag": "P"}` are interleaved with the text
/// and carry neither text nor a matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTextItem {
    /// Text of the item (absent for marked-content markers)
    #[serde(default, rename = "str")]
    pub text: String,
    /// Text rendering matrix (absent for marked-content markers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<[f64; 6]>,
    /// Advance width in page units
    #[serde(default)]
    pub width: f64,
    /// Height in page units
    #[serde(default)]
    pub height: f64,
}

impl RawTextItem {
    /// Convert into a fragment, or `None` for an item with no text or no
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::layout::RawTextItem;
    ///
    /// let marker: RawTextItem =
    ///     serde_json::from_str(r#"{"type": "endMarkedContent"}"#).unwrap();
    /// assert!(marker.into_fragment().is_none());
    /// ```
    pub fn into_fragment(self) -> Option<TextFragment> {
        if self.text.is_empty() {
            return None;
        }
        let transform = self.transform?;
        let origin = Point::new(transform[4], transform[5]);
        Some(TextFragment::new(self.text, origin, self.width, self.height))
    }
}

/// Build a page's fragment list, dropping fragments whose trimmed text is empty.
///
/// The decoder's emission order is kept; it is the order matched text is
/// joined in.
pub fn collect_fragments<I, T>(items: I) -> Vec<TextFragment>
where
    I: IntoIterator<Item = T>,
    T: Into<TextFragment>,
{
    items
        .into_iter()
        .map(Into::into)
        .filter(|fragment: &TextFragment| !fragment.is_blank())
        .collect()
}
