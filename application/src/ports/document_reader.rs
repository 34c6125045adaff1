//! Document reader port
//!
//! Turns an uploaded file into plain text for persona derivation.

use parley_domain::DomainError;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an uploaded document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("could not read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed {kind} document: {reason}")]
    Malformed { kind: &'static str, reason: String },

    #[error("document contains no extractable text")]
    Empty,
}

impl From<DocumentError> for DomainError {
    fn from(e: DocumentError) -> Self {
        DomainError::DocumentParse(e.to_string())
    }
}

/// Reads the text content of an uploaded document.
///
/// Implementations stage the upload in a transient location, extract from the
/// staged copy and remove it before returning; the raw document is never
/// retained. Reading is blocking; callers run it off the async executor.
pub trait DocumentReaderPort: Send + Sync {
    fn read_upload(&self, upload: &Path) -> Result<String, DocumentError>;
}
