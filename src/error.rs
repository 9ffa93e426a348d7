//! Error types for highlight extraction.
//!
//! Every failure the crate can report crosses the document boundary: either the
//! document could not be opened at all, or one of its pages could not be read.
//! Geometry anomalies and pages without highlights are never errors.

/// Result type alias for highlight extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to end users for any fatal extraction failure.
pub const USER_FACING_MESSAGE: &str = "Failed to parse PDF. Ensure the file contains a text layer.";

/// Error types that can occur while extracting highlights.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be opened or decoded
    #[error("Failed to decode document: {0}")]
    DocumentDecode(String),

    /// A page's annotations or text content could not be retrieved
    #[error("Failed to retrieve page {page}: {reason}")]
    PageRetrieval {
        /// 1-based page number
        page: usize,
        /// Reason reported by the document source
        reason: String,
    },

    /// A page number outside `1..=page_count` was requested
    #[error("Page {page} out of range (document has {page_count} pages)")]
    InvalidPage {
        /// Requested 1-based page number
        page: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse error classification exposed to callers that only need the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Document could not be opened or decoded
    Decode,
    /// A single page failed
    PageRetrieval,
    /// Reading or writing outside the document failed
    Io,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DocumentDecode(_) | Self::Json(_) => ErrorKind::Decode,
            Self::PageRetrieval { .. } | Self::InvalidPage { .. } => ErrorKind::PageRetrieval,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// The single generic message all fatal errors collapse to for end users.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_MESSAGE
    }

    /// Build a [`Error::PageRetrieval`] from any displayable cause.
    pub fn page_retrieval(page: usize, reason: impl std::fmt::Display) -> Self {
        Self::PageRetrieval {
            page,
            reason: reason.to_string(),
        }
    }
}
