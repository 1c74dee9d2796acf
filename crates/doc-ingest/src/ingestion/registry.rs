//! Extension to loader mapping

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::types::{DocumentUnit, FileType};

use super::pdf::PdfLoader;
use super::text::TextLoader;

/// A loader turns one file of a specific format into document units
pub trait Loader: Send + Sync {
    /// Load a file and return its document units in order
    fn load(&self, path: &Path) -> Result<Vec<DocumentUnit>>;

    /// Get the loader name for logging
    fn name(&self) -> &str;
}

static DEFAULT_REGISTRY: Lazy<LoaderRegistry> = Lazy::new(LoaderRegistry::with_defaults);

/// Process-wide registry with the built-in `.pdf` and `.txt` loaders
pub fn default_registry() -> &'static LoaderRegistry {
    &DEFAULT_REGISTRY
}

/// Lower-cased extension of `path` with its leading dot, e.g. `".pdf"`
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| normalize_extension(&ext.to_string_lossy()))
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Registry of loaders keyed by normalized file extension
#[derive(Clone, Default)]
pub struct LoaderRegistry {
    loaders: HashMap<String, Arc<dyn Loader>>,
}

impl LoaderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in loaders
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FileType::Pdf.extension(), Arc::new(PdfLoader));
        registry.register(FileType::Txt.extension(), Arc::new(TextLoader));
        registry
    }

    /// Register a loader for an extension (case-insensitive, dot optional).
    /// An existing entry for the same extension is replaced.
    pub fn register(&mut self, extension: &str, loader: Arc<dyn Loader>) {
        self.loaders.insert(normalize_extension(extension), loader);
    }

    /// Get the loader for an extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn Loader>> {
        self.loaders.get(&normalize_extension(extension)).cloned()
    }

    /// Get the loader for a path, based on its extension
    pub fn get_for_path(&self, path: &Path) -> Option<Arc<dyn Loader>> {
        extension_of(path).and_then(|ext| self.loaders.get(&ext).cloned())
    }

    /// Check if an extension is supported
    pub fn supports(&self, extension: &str) -> bool {
        self.loaders.contains_key(&normalize_extension(extension))
    }

    /// List registered extensions, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.loaders.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }
}

impl std::fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderRegistry")
            .field("extensions", &self.extensions())
            .finish()
    }
}
