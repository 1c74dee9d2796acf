//! Output formatting for the command-line harness

use std::io::{self, Write};

use crate::ingestion::LoadReport;
use crate::types::{DocumentUnit, Metadata};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Collapse whitespace runs to single spaces and cut to `max_chars`
/// characters, appending an ellipsis when text was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str("...");
    cut
}

/// Render metadata as compact JSON
pub fn format_metadata(metadata: &Metadata) -> String {
    serde_json::to_string(metadata).unwrap_or_else(|_| format!("{:?}", metadata))
}

/// Print the units loaded from a single file
pub fn print_file_units<W: Write>(
    out: &mut W,
    name: &str,
    units: &[DocumentUnit],
    preview_chars: usize,
) -> io::Result<()> {
    if units.is_empty() {
        return writeln!(
            out,
            "{}",
            colors::warning(&format!(
                "No content loaded from {} (file might be empty or unsupported).",
                name
            ))
        );
    }

    writeln!(
        out,
        "{} {} item(s) from {}:",
        colors::success("Successfully loaded"),
        colors::number(&units.len().to_string()),
        colors::file_path(name)
    )?;

    for (i, unit) in units.iter().enumerate() {
        writeln!(out, "  {}", colors::label(&format!("Item {}:", i + 1)))?;
        writeln!(out, "    Metadata: {}", format_metadata(unit.metadata()))?;
        writeln!(
            out,
            "    Content Preview: '{}'",
            preview(unit.text(), preview_chars)
        )?;
    }

    Ok(())
}

/// Print a directory load summary with previews of the first units
pub fn print_directory_report<W: Write>(
    out: &mut W,
    report: &LoadReport,
    max_items: usize,
    preview_chars: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        colors::label("Total documents/pages loaded:"),
        colors::number(&report.documents.len().to_string())
    )?;

    for (i, unit) in report.documents.iter().take(max_items).enumerate() {
        writeln!(
            out,
            "  Doc {}: Content='{}', Meta={}",
            i + 1,
            preview(unit.text(), preview_chars),
            format_metadata(unit.metadata())
        )?;
    }

    if report.documents.len() > max_items {
        writeln!(
            out,
            "  {}",
            colors::dim(&format!("... and {} more", report.documents.len() - max_items))
        )?;
    }

    for skipped in &report.skipped {
        writeln!(
            out,
            "  {} {} ({})",
            colors::warning("Skipped"),
            colors::file_path(&skipped.name),
            skipped.reason
        )?;
    }

    Ok(())
}
