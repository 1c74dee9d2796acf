//! Configuration for document ingestion

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ingestion::DirectoryLoader;

/// Main ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory searched for relative file names and used by "load all"
    #[serde(default = "default_data_dir")]
    pub default_data_dir: PathBuf,
    /// Visit directory entries in file-name order for reproducible output
    #[serde(default = "default_sort_entries")]
    pub sort_entries: bool,
    /// Preview configuration for the command-line harness
    #[serde(default)]
    pub preview: PreviewConfig,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data/raw") }
fn default_sort_entries() -> bool { true }

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            default_data_dir: default_data_dir(),
            sort_entries: default_sort_entries(),
            preview: PreviewConfig::default(),
        }
    }
}

/// How loaded units are previewed on the terminal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Number of units shown after a directory load
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Preview length for directory loads (characters)
    #[serde(default = "default_directory_chars")]
    pub directory_chars: usize,
    /// Preview length for single-file loads (characters)
    #[serde(default = "default_file_chars")]
    pub file_chars: usize,
}

fn default_max_items() -> usize { 5 }
fn default_directory_chars() -> usize { 70 }
fn default_file_chars() -> usize { 150 }

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            directory_chars: default_directory_chars(),
            file_chars: default_file_chars(),
        }
    }
}

impl LoaderConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::config(e.to_string()))
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Directory loader honoring this configuration
    pub fn directory_loader(&self) -> DirectoryLoader<'static> {
        DirectoryLoader::new().sort_entries(self.sort_entries)
    }
}
