//! Plain text loader

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{DocumentUnit, FileType};

use super::check_source_file;
use super::registry::Loader;

/// Loader for `.txt` files
#[derive(Debug, Default, Clone, Copy)]
pub struct TextLoader;

impl Loader for TextLoader {
    fn load(&self, path: &Path) -> Result<Vec<DocumentUnit>> {
        load_text(path)
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// Read a UTF-8 text file as a single document unit.
///
/// Returns an empty vector when the file holds only whitespace.
pub fn load_text(path: impl AsRef<Path>) -> Result<Vec<DocumentUnit>> {
    let path = path.as_ref();
    let filename = check_source_file(path, FileType::Txt)?;

    let text = read_utf8(path, &filename).map_err(|e| {
        tracing::error!("Error processing TXT file {}: {}", filename, e);
        e
    })?;

    Ok(DocumentUnit::whole_file(text, filename).into_iter().collect())
}

fn read_utf8(path: &Path, filename: &str) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::parse_failure(filename, e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| {
        Error::parse_failure(
            filename,
            format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        )
    })
}
