//! PDF loader: one document unit per non-blank page

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};
use crate::types::{DocumentUnit, FileType};

use super::check_source_file;
use super::registry::Loader;

/// Loader for `.pdf` files
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfLoader;

impl Loader for PdfLoader {
    fn load(&self, path: &Path) -> Result<Vec<DocumentUnit>> {
        load_pdf(path)
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

/// Extract the text of every non-blank page of a PDF.
///
/// Pages are visited in document order and keep their original 1-based
/// number, so a skipped blank page leaves a gap in the numbering. Any parse
/// failure, including a panic inside the PDF parser, fails the whole file.
pub fn load_pdf(path: impl AsRef<Path>) -> Result<Vec<DocumentUnit>> {
    let path = path.as_ref();
    let filename = check_source_file(path, FileType::Pdf)?;

    catch_parser_panic(&filename, || extract_pages(path, &filename)).map_err(|e| {
        tracing::error!("Error processing PDF {}: {}", filename, e);
        e
    })
}

/// Run `extract` and turn a panic into a parse failure.
///
/// lopdf panics on some malformed object streams instead of returning an error.
fn catch_parser_panic<T>(filename: &str, extract: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(extract)).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(Error::parse_failure(
            filename,
            format!("PDF parser panicked: {}", reason),
        ))
    })
}

fn extract_pages(path: &Path, filename: &str) -> Result<Vec<DocumentUnit>> {
    // The document is read fully into memory; no file handle outlives `load`.
    let doc = Document::load(path)
        .map_err(|e| Error::parse_failure(filename, format!("Failed to load PDF: {}", e)))?;

    let pages = doc.get_pages();
    tracing::debug!("[{}] {} page(s)", filename, pages.len());

    let mut documents = Vec::with_capacity(pages.len());
    for page_number in pages.into_keys() {
        let text = doc.extract_text(&[page_number]).map_err(|e| {
            Error::parse_failure(
                filename,
                format!("Failed to extract text from page {}: {}", page_number, e),
            )
        })?;

        // Some font encodings leave NUL bytes behind
        let text = text.replace('\0', "");

        match DocumentUnit::page(text, filename, page_number) {
            Some(unit) => documents.push(unit),
            None => tracing::debug!("[{}] Page {} has no text, skipping", filename, page_number),
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::ingestion::test_support::write_pdf;
    use std::fs;

    #[test]
    fn test_one_unit_per_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(
            dir.path(),
            "report.pdf",
            &["First page", "Second page", "Third page"],
        );

        let units = load_pdf(&path).unwrap();
        assert_eq!(units.len(), 3);

        let pages: Vec<_> = units.iter().map(|u| u.page_number()).collect();
        assert_eq!(pages, vec![Some(1), Some(2), Some(3)]);

        assert!(units[0].text().contains("First page"));
        assert!(units[2].text().contains("Third page"));
        assert!(units.iter().all(|u| u.source() == "report.pdf"));
    }

    #[test]
    fn test_blank_page_keeps_original_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "gap.pdf", &["Intro", "", "Conclusion"]);

        let units = load_pdf(&path).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].page_number(), Some(1));
        assert_eq!(units[1].page_number(), Some(3));
        assert!(units[1].text().contains("Conclusion"));
    }

    #[test]
    fn test_all_blank_pages_yield_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "empty.pdf", &["", ""]);

        assert!(load_pdf(&path).unwrap().is_empty());
    }

    #[test]
    fn test_uppercase_extension_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "SCAN.PDF", &["Upper"]);

        let units = load_pdf(&path).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].source(), "SCAN.PDF");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_pdf(dir.path().join("missing.pdf")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_text_file_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "plain text").unwrap();

        let err = load_pdf(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_corrupt_pdf_is_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is definitely not a pdf").unwrap();

        let err = load_pdf(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert!(err.to_string().contains("broken.pdf"));
    }

    #[test]
    fn test_parser_panic_becomes_parse_failure() {
        let err = catch_parser_panic::<()>("weird.pdf", || panic!("index out of range"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert!(err.to_string().contains("weird.pdf"));
        assert!(err.to_string().contains("PDF parser panicked: index out of range"));

        let value = catch_parser_panic("fine.pdf", || Ok(7)).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_byte_corrupted_pdf_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "damaged.pdf", &["One", "Two", "Three"]);
        let mut bytes = fs::read(&path).unwrap();
        bytes[105] = b'9';
        fs::write(&path, bytes).unwrap();

        // Either the damage is tolerated or it surfaces as a parse failure
        if let Err(err) = load_pdf(&path) {
            assert_eq!(err.kind(), ErrorKind::ParseFailure);
        }
    }

    #[test]
    fn test_loader_trait_delegates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "one.pdf", &["Only page"]);

        assert_eq!(PdfLoader.name(), "pdf");
        assert_eq!(PdfLoader.load(&path).unwrap().len(), 1);
    }
}
