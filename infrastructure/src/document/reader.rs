//! Filesystem-backed document reader

use super::staging::UploadStaging;
use super::{docx, pdf, text};
use parley_application::{DocumentError, DocumentReaderPort};
use parley_domain::DocumentKind;
use std::path::Path;
use tracing::{debug, warn};

/// Reads PDF, DOCX, TXT and CSV uploads from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalDocumentReader {
    staging: UploadStaging,
}

impl LocalDocumentReader {
    pub fn new(staging: UploadStaging) -> Self {
        Self { staging }
    }

    fn extract(kind: DocumentKind, path: &Path) -> Result<String, DocumentError> {
        match kind {
            DocumentKind::Pdf => pdf::extract(path),
            DocumentKind::Docx => docx::extract(path),
            DocumentKind::Txt | DocumentKind::Csv => text::extract(path),
        }
    }
}

impl DocumentReaderPort for LocalDocumentReader {
    fn read_upload(&self, upload: &Path) -> Result<String, DocumentError> {
        let kind = upload
            .extension()
            .and_then(|e| e.to_str())
            .and_then(DocumentKind::from_extension)
            .ok_or_else(|| DocumentError::Unsupported(upload.display().to_string()))?;

        let staged = self.staging.stage(upload)?;
        let result = Self::extract(kind, staged.path());
        if let Err(e) = staged.remove() {
            warn!("Could not remove staged upload: {}", e);
        }

        let text = result?;
        if text.trim().is_empty() {
            return Err(DocumentError::Empty);
        }
        debug!(
            "Extracted {} characters from {}",
            text.chars().count(),
            upload.display()
        );
        Ok(text)
    }
}
