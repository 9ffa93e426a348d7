//! Whitespace normalization for reassembled highlight text.
//!
//! Fragments matched to one highlight are joined with single spaces and every
//! whitespace run is collapsed, so the result never carries doubled or
//! leading/trailing blanks regardless of how the source layout spaced them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for any run of whitespace characters
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse every run of whitespace into one space and trim both ends.
///
/// # Examples
///
/// ```
/// use pdf_highlights::converters::whitespace::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a \t\n b  "), "a b");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Join matched fragments in order into one normalized string.
///
/// An empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use pdf_highlights::converters::whitespace::assemble_fragments;
///
/// assert_eq!(assemble_fragments(&["a  ", " b", "c"]), "a b c");
/// assert_eq!(assemble_fragments::<&str>(&[]), "");
/// ```
pub fn assemble_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    collapse_whitespace(&joined)
}
