//! DOCX text extraction: `word/document.xml` inside the zip container

use parley_application::DocumentError;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BODY_PART: &str = "word/document.xml";

fn malformed(reason: impl ToString) -> DocumentError {
    DocumentError::Malformed {
        kind: "docx",
        reason: reason.to_string(),
    }
}

pub(super) fn extract(path: &Path) -> Result<String, DocumentError> {
    let file = File::open(path).map_err(|e| DocumentError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(malformed)?;
    let mut xml = String::new();
    archive
        .by_name(BODY_PART)
        .map_err(malformed)?
        .read_to_string(&mut xml)
        .map_err(malformed)?;
    body_text(&xml)
}

/// Text runs (`w:t`) joined per paragraph (`w:p`), one paragraph per line.
fn body_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => out.push_str(&t.decode().map_err(malformed)?),
            Event::GeneralRef(r) if in_run_text => {
                if let Some(c) = r.resolve_char_ref().map_err(malformed)? {
                    out.push(c);
                } else {
                    let name = r.decode().map_err(malformed)?;
                    out.push_str(resolve_predefined_entity(&name).unwrap_or_default());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>I know that</w:t></w:r><w:r><w:t xml:space="preserve"> I know nothing.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Virtue</w:t><w:tab/><w:t>&amp; knowledge</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_become_lines() {
        let text = body_text(DOC).unwrap();
        assert_eq!(text, "I know that I know nothing.\nVirtue\t& knowledge\n");
    }

    #[test]
    fn test_extract_reads_zip_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apology.docx");
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        zip.start_file(BODY_PART, SimpleFileOptions::default())
            .unwrap();
        zip.write_all(DOC.as_bytes()).unwrap();
        zip.finish().unwrap();

        let text = extract(&path).unwrap();

        assert!(text.starts_with("I know that I know nothing."));
    }

    #[test]
    fn test_missing_body_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        zip.start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        zip.finish().unwrap();

        let err = extract(&path).unwrap_err();

        assert!(matches!(err, DocumentError::Malformed { kind: "docx", .. }));
    }

    #[test]
    fn test_not_a_zip_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.docx");
        std::fs::write(&path, "plain text pretending").unwrap();

        assert!(matches!(
            extract(&path),
            Err(DocumentError::Malformed { kind: "docx", .. })
        ));
    }
}
