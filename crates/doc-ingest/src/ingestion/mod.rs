//! Document ingestion: per-format loaders, the extension registry and the
//! directory aggregator

mod directory;
mod pdf;
mod registry;
mod text;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::FileType;

pub use directory::{load_directory, DirectoryLoader, LoadReport, SkipReason, SkippedFile};
pub use pdf::{load_pdf, PdfLoader};
pub use registry::{default_registry, extension_of, Loader, LoaderRegistry};
pub use text::{load_text, TextLoader};

/// Check that `path` is an existing regular file of the given type and
/// return its file name for use as the `source` metadata.
pub(crate) fn check_source_file(path: &Path, expected: FileType) -> Result<String> {
    if !path.is_file() {
        return Err(Error::not_found(path));
    }

    let matches = extension_of(path).as_deref() == Some(expected.extension());
    if !matches {
        return Err(Error::invalid_input(path, expected.display_name()));
    }

    Ok(file_name(path))
}

/// Final path component as a display string
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;

    #[test]
    fn test_check_source_file_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Report.PDF");
        fs::write(&path, b"%PDF").unwrap();

        let name = check_source_file(&path, FileType::Pdf).unwrap();
        assert_eq!(name, "Report.PDF");
    }

    #[test]
    fn test_check_source_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_source_file(&dir.path().join("nope.txt"), FileType::Txt).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_check_source_file_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("folder.txt");
        fs::create_dir(&sub).unwrap();

        let err = check_source_file(&sub, FileType::Txt).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_check_source_file_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "text").unwrap();

        let err = check_source_file(&path, FileType::Txt).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
