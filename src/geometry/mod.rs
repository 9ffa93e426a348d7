//! Geometric primitives and the annotation/fragment overlap test.
//!
//! Coordinates are PDF user-space units and are compared exactly as the
//! document source reports them. No tolerance is applied anywhere.

use serde::{Deserialize, Serialize};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the anchor corner
    pub x: f64,
    /// Y coordinate of the anchor corner
    pub y: f64,
    /// Width of rectangle
    pub width: f64,
    /// Height of rectangle
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from anchor position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.max_x(), 100.0);
    /// assert_eq!(rect.max_y(), 50.0);
    /// ```
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Lower edge in PDF space.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Upper edge in PDF space.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Sort two values, keeping a NaN in the result instead of discarding it.
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Decide whether a text fragment's box overlaps an annotation rectangle.
///
/// `annotation_rect` is `[x1, y1, x2, y2]` with corners in any order, as
/// stored in a PDF `/Rect` entry. The sorted corners are compared against the
/// fragment's edges as given, never rebuilt from a width, so a fragment that
/// only touches the rectangle's edge does not overlap it. Any NaN coordinate
/// makes the test false.
///
/// # Examples
///
/// ```
/// use pdf_highlights::geometry::{overlaps, Rect};
///
/// let word = Rect::new(100.0, 700.0, 50.0, 15.0);
/// assert!(overlaps(&[300.0, 715.0, 100.0, 700.0], &word));
/// assert!(!overlaps(&[0.0, 0.0, 1.0, 1.0], &word));
///
/// let touching = Rect::new(300.0, 700.0, 20.0, 15.0);
/// assert!(!overlaps(&[300.0, 715.0, 100.0, 700.0], &touching));
/// ```
pub fn overlaps(annotation_rect: &[f64; 4], fragment_box: &Rect) -> bool {
    let [x1, y1, x2, y2] = *annotation_rect;
    let (min_x, max_x) = ordered(x1, x2);
    let (min_y, max_y) = ordered(y1, y2);

    min_x < fragment_box.max_x()
        && max_x > fragment_box.min_x()
        && min_y < fragment_box.max_y()
        && max_y > fragment_box.min_y()
}
