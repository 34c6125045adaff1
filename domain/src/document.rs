//! Supported upload document types

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document types accepted for persona derivation (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
    Csv,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Pdf,
        DocumentKind::Docx,
        DocumentKind::Txt,
        DocumentKind::Csv,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
            DocumentKind::Csv => "csv",
        }
    }

    /// Match a file extension, case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(ext))
    }

    /// Classify an upload by its file name.
    pub fn detect(path: &Path) -> Result<Self, DomainError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| {
            DomainError::DocumentParse(format!(
                "unsupported document type '{}' (expected one of: pdf, docx, txt, csv)",
                path.display()
            ))
        })
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
