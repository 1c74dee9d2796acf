//! Core types for document ingestion

pub mod document;

pub use document::{DocumentUnit, FileType, Metadata, PAGE_KEY, SOURCE_KEY};
