//! PDF text extraction via `lopdf`

use parley_application::DocumentError;
use std::path::Path;
use tracing::debug;

fn malformed(reason: impl ToString) -> DocumentError {
    DocumentError::Malformed {
        kind: "pdf",
        reason: reason.to_string(),
    }
}

/// Text of every page, in page order.
pub(super) fn extract(path: &Path) -> Result<String, DocumentError> {
    let doc = lopdf::Document::load(path).map_err(malformed)?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    debug!("PDF has {} pages", pages.len());
    if pages.is_empty() {
        return Err(DocumentError::Empty);
    }
    doc.extract_text(&pages).map_err(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, "this is not a pdf").unwrap();

        let err = extract(&path).unwrap_err();

        assert!(matches!(err, DocumentError::Malformed { kind: "pdf", .. }));
    }
}
