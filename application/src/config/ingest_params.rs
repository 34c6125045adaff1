//! Document ingestion parameters.

/// Controls how much of an uploaded document reaches the derivation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestParams {
    /// Extracted text is clipped to this many characters
    pub max_document_chars: usize,
}

impl Default for IngestParams {
    fn default() -> Self {
        Self {
            max_document_chars: 20_000,
        }
    }
}

impl IngestParams {
    pub fn with_max_document_chars(mut self, max: usize) -> Self {
        self.max_document_chars = max;
        self
    }
}
