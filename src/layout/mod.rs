//! Page text layout as seen by the highlight correlator.
//!
//! Text arrives as positioned fragments in decoder order. No reordering or
//! clustering is performed: the decoder's order is taken as reading order.

pub mod text_fragment;

// Re-export main types
pub use text_fragment::{RawTextItem, TextFragment, collect_fragments};
