//! Configuration for highlight extraction.

use serde::{Deserialize, Serialize};

/// Text emitted for a highlight whose covered text cannot be recovered.
pub const FALLBACK_TEXT: &str = "Highlight detected (Text unreadable or hidden)";

/// What the document walker does when a page cannot be retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageErrorPolicy {
    /// Stop at the first failing page and return its error
    #[default]
    Abort,
    /// Log the failure, record the page as skipped and continue
    SkipPage,
}

/// Highlight extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Text used when neither embedded contents nor overlapping text exist.
    pub fallback_text: String,

    /// Handling of per-page retrieval failures.
    pub page_error_policy: PageErrorPolicy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            fallback_text: FALLBACK_TEXT.to_string(),
            page_error_policy: PageErrorPolicy::Abort,
        }
    }

    /// Set the fallback text.
    ///
    /// Blank text is ignored so an extracted highlight is never empty.
    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.fallback_text = text;
        }
        self
    }

    /// Set the page error policy.
    pub fn with_page_error_policy(mut self, policy: PageErrorPolicy) -> Self {
        self.page_error_policy = policy;
        self
    }
}
