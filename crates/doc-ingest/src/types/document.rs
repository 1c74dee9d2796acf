//! Document unit and file type definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata key holding the source file name
pub const SOURCE_KEY: &str = "source";
/// Metadata key holding the 1-based page number
pub const PAGE_KEY: &str = "page";

/// Metadata attached to a document unit
pub type Metadata = BTreeMap<String, Value>;

/// Supported file types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Plain text file
    Txt,
}

impl FileType {
    /// Detect file type from extension (with or without the leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Registry key for this type, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Txt => ".txt",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Txt => "TXT",
        }
    }
}

/// One extracted piece of text with its source metadata.
///
/// A unit is a single page of a paginated document or the whole content of
/// an unpaginated one. Text is never blank: the constructors refuse it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentUnit {
    text: String,
    metadata: Metadata,
}

impl DocumentUnit {
    /// Unit for one page of a paginated document
    pub fn page(text: impl Into<String>, source: impl Into<String>, page: u32) -> Option<Self> {
        let mut unit = Self::whole_file(text, source)?;
        unit.metadata.insert(PAGE_KEY.to_string(), Value::from(page));
        Some(unit)
    }

    /// Unit covering an entire unpaginated file
    pub fn whole_file(text: impl Into<String>, source: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        let mut metadata = Metadata::new();
        metadata.insert(SOURCE_KEY.to_string(), Value::String(source.into()));
        Some(Self { text, metadata })
    }

    /// Extracted text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source metadata
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Source file name
    pub fn source(&self) -> &str {
        self.metadata
            .get(SOURCE_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Page number, for paginated formats
    pub fn page_number(&self) -> Option<u32> {
        self.metadata
            .get(PAGE_KEY)
            .and_then(Value::as_u64)
            .and_then(|p| u32::try_from(p).ok())
    }
}
