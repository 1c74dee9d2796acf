//! doc-ingest: extract plain text with source metadata from PDF and text files
//!
//! Single files are loaded with [`load_pdf`] or [`load_text`]; every supported
//! file directly inside a directory is loaded with [`load_directory`], which
//! logs and skips files that fail instead of aborting.

pub mod cli;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod types;

pub use config::LoaderConfig;
pub use error::{Error, ErrorKind, Result};
pub use ingestion::{
    default_registry, load_directory, load_pdf, load_text, DirectoryLoader, LoadReport, Loader,
    LoaderRegistry,
};
pub use types::{DocumentUnit, FileType, Metadata};
