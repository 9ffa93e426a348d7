//! Highlight annotation records.
//!
//! [`RawAnnotation`] is the shape a document decoder hands over: both legacy
//! kind fields, an unnormalized rectangle, optional contents and color.
//! [`RawAnnotation::resolve`] turns it into the canonical [`Annotation`] that
//! the correlator consumes.

use crate::annotation_types::{AnnotationColor, AnnotationSubtype};
use serde::{Deserialize, Serialize};

/// A page annotation with its kind already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Canonical annotation kind
    pub subtype: AnnotationSubtype,

    /// Rectangle bounds [x1, y1, x2, y2]; corner order is not guaranteed
    pub rect: [f64; 4],

    /// Text contents of the annotation (Contents entry)
    pub contents: Option<String>,

    /// Color array (C entry), passed through untouched
    pub color: Option<AnnotationColor>,
}

impl Annotation {
    /// Create an annotation of the given kind with no contents or color.
    pub fn new(subtype: AnnotationSubtype, rect: [f64; 4]) -> Self {
        Self {
            subtype,
            rect,
            contents: None,
            color: None,
        }
    }

    /// Create a highlight annotation.
    pub fn highlight(rect: [f64; 4]) -> Self {
        Self::new(AnnotationSubtype::Highlight, rect)
    }

    /// Set the embedded contents (builder pattern).
    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    /// Set the color components (builder pattern).
    pub fn with_color(mut self, components: Vec<f64>) -> Self {
        self.color = Some(AnnotationColor::new(components));
        self
    }

    /// Embedded text, if present and not blank.
    ///
    /// The returned text is the stored contents verbatim, not trimmed.
    pub fn embedded_text(&self) -> Option<&str> {
        self.contents
            .as_deref()
            .filter(|contents| !contents.trim().is_empty())
    }
}

/// Annotation record as emitted by a document decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnnotation {
    /// Kind as reported in the `subtype` field
    #[serde(default)]
    pub subtype: Option<String>,

    /// Kind as reported in the legacy `type` field
    #[serde(default, rename = "type")]
    pub annotation_type: Option<String>,

    /// Rectangle [x1, y1, x2, y2]
    #[serde(default)]
    pub rect: Option<[f64; 4]>,

    /// Embedded text contents
    #[serde(default)]
    pub contents: Option<String>,

    /// Color components
    #[serde(default)]
    pub color: Option<Vec<f64>>,
}

impl RawAnnotation {
    /// Resolve into a canonical [`Annotation`].
    ///
    /// A missing rectangle becomes all-NaN, which never overlaps anything, so
    /// such a highlight still yields the fallback text instead of an error.
    pub fn resolve(self) -> Annotation {
        let subtype =
            AnnotationSubtype::resolve(self.subtype.as_deref(), self.annotation_type.as_deref());
        Annotation {
            subtype,
            rect: self.rect.unwrap_or([f64::NAN; 4]),
            contents: self.contents,
            color: self.color.map(AnnotationColor::new),
        }
    }
}

impl From<RawAnnotation> for Annotation {
    fn from(raw: RawAnnotation) -> Self {
        raw.resolve()
    }
}
