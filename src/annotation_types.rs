//! Annotation kinds and colors per PDF spec ISO 32000-1:2008, Section 12.5.
//!
//! Producers disagree on where the annotation kind lives: some decoders report
//! it as `subtype`, older ones as `type`. Both are resolved here, once, into a
//! closed [`AnnotationSubtype`] so nothing downstream compares strings.

use serde::{Deserialize, Serialize};

/// Annotation subtype per PDF spec Table 169.
///
/// Only the kinds a highlight extractor is likely to meet are distinguished;
/// everything else resolves to [`AnnotationSubtype::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnnotationSubtype {
    /// Text annotation (sticky note) - Section 12.5.6.4
    Text,
    /// Link annotation - Section 12.5.6.5
    Link,
    /// Free text annotation - Section 12.5.6.6
    FreeText,
    /// Highlight annotation - Section 12.5.6.10
    Highlight,
    /// Underline annotation - Section 12.5.6.10
    Underline,
    /// Squiggly underline annotation - Section 12.5.6.10
    Squiggly,
    /// Strikeout annotation - Section 12.5.6.10
    StrikeOut,
    /// Ink annotation - Section 12.5.6.13
    Ink,
    /// Popup annotation - Section 12.5.6.14
    Popup,
    /// Widget annotation (form field) - Section 12.5.6.19
    Widget,
    /// Any other or missing subtype
    #[default]
    Unknown,
}

impl AnnotationSubtype {
    /// Get the PDF name for this annotation subtype.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Link => "Link",
            Self::FreeText => "FreeText",
            Self::Highlight => "Highlight",
            Self::Underline => "Underline",
            Self::Squiggly => "Squiggly",
            Self::StrikeOut => "StrikeOut",
            Self::Ink => "Ink",
            Self::Popup => "Popup",
            Self::Widget => "Widget",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse from PDF name. Matching is case-sensitive.
    pub fn from_pdf_name(name: &str) -> Self {
        match name {
            "Text" => Self::Text,
            "Link" => Self::Link,
            "FreeText" => Self::FreeText,
            "Highlight" => Self::Highlight,
            "Underline" => Self::Underline,
            "Squiggly" => Self::Squiggly,
            "StrikeOut" => Self::StrikeOut,
            "Ink" => Self::Ink,
            "Popup" => Self::Popup,
            "Widget" => Self::Widget,
            _ => Self::Unknown,
        }
    }

    /// Resolve the canonical kind from the two discriminator fields decoders use.
    ///
    /// A record counts as a highlight when either field is exactly `"Highlight"`.
    /// Otherwise `subtype` wins over the legacy `type` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::annotation_types::AnnotationSubtype;
    ///
    /// assert_eq!(
    ///     AnnotationSubtype::resolve(Some("Widget"), Some("Highlight")),
    ///     AnnotationSubtype::Highlight
    /// );
    /// assert_eq!(AnnotationSubtype::resolve(Some("highlight"), None), AnnotationSubtype::Unknown);
    /// ```
    pub fn resolve(subtype: Option<&str>, legacy_type: Option<&str>) -> Self {
        let subtype = subtype.map(Self::from_pdf_name);
        let legacy = legacy_type.map(Self::from_pdf_name);

        if subtype == Some(Self::Highlight) || legacy == Some(Self::Highlight) {
            return Self::Highlight;
        }
        match (subtype, legacy) {
            (Some(kind), _) if kind != Self::Unknown => kind,
            (_, Some(kind)) => kind,
            _ => Self::Unknown,
        }
    }

    /// Check if this is a highlight annotation.
    pub fn is_highlight(&self) -> bool {
        matches!(self, Self::Highlight)
    }
}

/// Annotation color (C entry), carried through exactly as decoded.
///
/// The component count and numeric range depend on the producing tool and
/// color space (0–1 and 0–255 are both common). Values are never validated,
/// clamped or converted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationColor(pub Vec<f64>);

impl AnnotationColor {
    /// Wrap decoded color components.
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// The raw components.
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// Render as a CSS-style `rgb(...)` string with components joined by commas.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::annotation_types::AnnotationColor;
    ///
    /// let yellow = AnnotationColor::new(vec![1.0, 1.0, 0.0]);
    /// assert_eq!(yellow.css(), "rgb(1,1,0)");
    ///
    /// let raw = AnnotationColor::new(vec![255.0, 204.5, 0.0]);
    /// assert_eq!(raw.css(), "rgb(255,204.5,0)");
    /// ```
    pub fn css(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        format!("rgb({})", parts.join(","))
    }
}

impl From<Vec<f64>> for AnnotationColor {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_subtype_roundtrip() {
        let subtypes = [
            AnnotationSubtype::Text,
            AnnotationSubtype::Link,
            AnnotationSubtype::Highlight,
            AnnotationSubtype::StrikeOut,
            AnnotationSubtype::Ink,
            AnnotationSubtype::Widget,
        ];

        for subtype in subtypes {
            let name = subtype.pdf_name();
            let parsed = AnnotationSubtype::from_pdf_name(name);
            assert_eq!(subtype, parsed);
        }
    }

    #[test]
    fn test_from_pdf_name_is_case_sensitive() {
        assert_eq!(AnnotationSubtype::from_pdf_name("HIGHLIGHT"), AnnotationSubtype::Unknown);
        assert_eq!(AnnotationSubtype::from_pdf_name("highlight"), AnnotationSubtype::Unknown);
        assert_eq!(AnnotationSubtype::from_pdf_name(" Highlight"), AnnotationSubtype::Unknown);
    }

    #[test]
    fn test_resolve_either_field() {
        assert_eq!(AnnotationSubtype::resolve(Some("Highlight"), None), AnnotationSubtype::Highlight);
        assert_eq!(AnnotationSubtype::resolve(None, Some("Highlight")), AnnotationSubtype::Highlight);
        assert_eq!(
            AnnotationSubtype::resolve(Some("Underline"), Some("Highlight")),
            AnnotationSubtype::Highlight
        );
    }

    #[test]
    fn test_resolve_non_highlight() {
        assert_eq!(AnnotationSubtype::resolve(Some("Underline"), None), AnnotationSubtype::Underline);
        assert_eq!(AnnotationSubtype::resolve(Some("Note"), None), AnnotationSubtype::Unknown);
        assert_eq!(AnnotationSubtype::resolve(Some("Note"), Some("Ink")), AnnotationSubtype::Ink);
        assert_eq!(AnnotationSubtype::resolve(None, None), AnnotationSubtype::Unknown);
    }

    #[test]
    fn test_is_highlight() {
        assert!(AnnotationSubtype::Highlight.is_highlight());
        assert!(!AnnotationSubtype::Underline.is_highlight());
    }

    #[test]
    fn test_annotation_color_passthrough() {
        let color = AnnotationColor::new(vec![0.2, 300.0, -1.0, 4.0]);
        assert_eq!(color.components(), &[0.2, 300.0, -1.0, 4.0]);
        assert_eq!(color.css(), "rgb(0.2,300,-1,4)");
    }

    #[test]
    fn test_annotation_color_serde_transparent() {
        let color: AnnotationColor = serde_json::from_str("[1.0, 0.5, 0]").unwrap();
        assert_eq!(color, AnnotationColor::from(vec![1.0, 0.5, 0.0]));
        assert_eq!(serde_json::to_string(&color).unwrap(), "[1.0,0.5,0.0]");
    }
}
