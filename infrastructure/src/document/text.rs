//! Plain-text documents (TXT and CSV)

use parley_application::DocumentError;
use std::path::Path;

/// Read a text file, replacing invalid UTF-8 and dropping a leading BOM.
pub(super) fn extract(path: &Path) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path).map_err(|e| DocumentError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(text.replace("\r\n", "\n"))
}
