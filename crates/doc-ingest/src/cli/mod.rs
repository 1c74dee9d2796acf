//! Command-line harness around the loaders
//!
//! Loads a single path, every supported file in the data directory, or runs
//! an interactive prompt that accepts file paths, `all` and `quit`.

pub mod output;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;

use crate::config::LoaderConfig;
use crate::ingestion::{default_registry, extension_of};
use crate::types::FileType;

use output::colors;

/// Extract text and source metadata from PDF and TXT files
#[derive(Parser, Debug)]
#[command(name = "doc-ingest")]
#[command(version)]
#[command(about = "Extract text with source metadata from PDF and TXT files", long_about = None)]
pub struct Cli {
    /// File or directory to load; omit to start the interactive prompt
    pub path: Option<PathBuf>,

    /// Load every supported file in the default data directory
    #[arg(long, conflicts_with = "path")]
    pub all: bool,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the default data directory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for loaded units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable previews
    #[default]
    Human,
    /// JSON for scripting
    Json,
}

/// Run the harness with parsed arguments
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = LoaderConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.default_data_dir = dir;
    }

    let stdout = io::stdout();
    let mut session = Session::new(config, cli.format, stdout.lock());

    if cli.all {
        return session.load_all();
    }
    if let Some(path) = cli.path {
        return session.load_path(&path);
    }

    let stdin = io::stdin();
    session.interactive(stdin.lock())
}

/// Resolve user input to a path.
///
/// A relative path that does not exist as given is looked up inside the
/// default data directory.
pub fn resolve_input(input: &Path, data_dir: &Path) -> PathBuf {
    if input.is_absolute() || input.exists() {
        input.to_path_buf()
    } else {
        data_dir.join(input)
    }
}

/// One harness session writing to `out`
pub struct Session<W: Write> {
    config: LoaderConfig,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: LoaderConfig, format: OutputFormat, out: W) -> Self {
        Self { config, format, out }
    }

    /// Load every supported file in the default data directory
    pub fn load_all(&mut self) -> anyhow::Result<()> {
        let dir = self.config.default_data_dir.clone();
        if !dir.is_dir() {
            bail!("Directory {} not found or is not a directory", dir.display());
        }
        self.load_dir(&dir)
    }

    /// Load a file or directory given by the user
    pub fn load_path(&mut self, input: &Path) -> anyhow::Result<()> {
        let path = resolve_input(input, &self.config.default_data_dir);

        if path.is_dir() {
            self.load_dir(&path)
        } else if path.is_file() {
            self.load_file(&path)
        } else {
            bail!("File not found or is not a file: {}", path.display())
        }
    }

    /// Prompt for input until `quit` or end of input
    pub fn interactive<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        writeln!(
            self.out,
            "Default search directory for files if no full path is given: {}",
            colors::file_path(&self.config.default_data_dir.display().to_string())
        )?;
        writeln!(self.out, "You can also provide an absolute path to a file.")?;

        let mut lines = input.lines();
        loop {
            write!(
                self.out,
                "\nEnter the path to a PDF or TXT file (or type 'all' to load from {}, or 'quit' to exit): ",
                self.config.default_data_dir.display()
            )?;
            self.out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                break;
            };
            let line = line.context("Failed to read input")?;
            let line = line.trim();

            let result = match line.to_lowercase().as_str() {
                "" => continue,
                "quit" => break,
                "all" => self.load_all(),
                _ => self.load_path(Path::new(line)),
            };

            if let Err(e) = result {
                writeln!(self.out, "{} {:#}", colors::error("Error:"), e)?;
            }
        }

        Ok(())
    }

    fn load_dir(&mut self, dir: &Path) -> anyhow::Result<()> {
        if self.format == OutputFormat::Human {
            writeln!(
                self.out,
                "\n--- Loading all supported documents from '{}' ---",
                dir.display()
            )?;
        }

        let report = self.config.directory_loader().load_with_report(dir)?;

        match self.format {
            OutputFormat::Human => output::print_directory_report(
                &mut self.out,
                &report,
                self.config.preview.max_items,
                self.config.preview.directory_chars,
            )?,
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::to_string_pretty(&report)?)?
            }
        }

        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let registry = default_registry();
        let Some(loader) = registry.get_for_path(path) else {
            bail!(
                "Unsupported file type: {}. Please provide one of: {}",
                extension_of(path).unwrap_or_else(|| "(none)".to_string()),
                registry.extensions().join(", ")
            );
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if self.format == OutputFormat::Human {
            let label = extension_of(path)
                .and_then(|ext| FileType::from_extension(&ext))
                .map(|file_type| file_type.display_name().to_string())
                .unwrap_or_else(|| loader.name().to_uppercase());
            writeln!(self.out, "\n--- Loading {}: {} ---", label, name)?;
        }

        let units = loader.load(path)?;

        match self.format {
            OutputFormat::Human => output::print_file_units(
                &mut self.out,
                &name,
                &units,
                self.config.preview.file_chars,
            )?,
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::to_string_pretty(&units)?)?
            }
        }

        Ok(())
    }
}
