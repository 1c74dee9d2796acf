//! Directory aggregation: load every supported file directly inside a folder

use std::fmt;
use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::DocumentUnit;

use super::registry::{default_registry, LoaderRegistry};

/// Why a directory entry contributed no documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// No loader is registered for the file's extension
    Unsupported,
    /// The loader returned an error
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unsupported => write!(f, "unsupported file type"),
            SkipReason::Failed(message) => write!(f, "failed: {}", message),
        }
    }
}

/// A file that was skipped during a directory load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub name: String,
    pub reason: SkipReason,
}

/// Outcome of a directory load
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Aggregated document units, in file order then page order
    pub documents: Vec<DocumentUnit>,
    /// Files a loader accepted, including ones that yielded no units
    pub loaded: Vec<String>,
    /// Files that were skipped, with the reason
    pub skipped: Vec<SkippedFile>,
}

/// Loads all supported files directly inside a directory, isolating
/// per-file failures
#[derive(Debug, Clone, Copy)]
pub struct DirectoryLoader<'r> {
    registry: &'r LoaderRegistry,
    sort_entries: bool,
}

impl Default for DirectoryLoader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryLoader<'static> {
    /// Loader backed by the default registry, visiting entries by name
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }
}

impl<'r> DirectoryLoader<'r> {
    /// Loader backed by a custom registry
    pub fn with_registry(registry: &'r LoaderRegistry) -> Self {
        Self {
            registry,
            sort_entries: true,
        }
    }

    /// Visit entries sorted by file name (`true`) or in filesystem order
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Load all supported files and return the aggregated units
    pub fn load(&self, dir: impl AsRef<Path>) -> Result<Vec<DocumentUnit>> {
        self.load_with_report(dir).map(|report| report.documents)
    }

    /// Load all supported files and report what was loaded and skipped.
    ///
    /// Only a missing directory is an error; unsupported or failing files are
    /// logged and recorded in the report.
    pub fn load_with_report(&self, dir: impl AsRef<Path>) -> Result<LoadReport> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::not_found(dir));
        }

        let mut walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);
        if self.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut report = LoadReport::default();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Could not read directory entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            let Some(loader) = self.registry.get_for_path(path) else {
                tracing::info!("Skipping unsupported file type: {}", name);
                report.skipped.push(SkippedFile {
                    name,
                    reason: SkipReason::Unsupported,
                });
                continue;
            };

            tracing::info!("Loading document: {}", name);
            match loader.load(path) {
                Ok(units) => {
                    tracing::debug!("[{}] {} unit(s) via {} loader", name, units.len(), loader.name());
                    report.documents.extend(units);
                    report.loaded.push(name);
                }
                Err(e) => {
                    tracing::error!("Failed to load {}: {}", name, e);
                    report.skipped.push(SkippedFile {
                        name,
                        reason: SkipReason::Failed(e.to_string()),
                    });
                }
            }
        }

        if report.documents.is_empty() {
            tracing::info!(
                "No documents successfully loaded from {}. Check file types and content.",
                dir.display()
            );
        }

        Ok(report)
    }
}

/// Load every supported file directly inside `dir` using the default registry
pub fn load_directory(dir: impl AsRef<Path>) -> Result<Vec<DocumentUnit>> {
    DirectoryLoader::new().load(dir)
}
