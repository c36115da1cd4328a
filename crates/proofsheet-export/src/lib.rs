//! proofsheet-export: writers for extracted proof records.
//!
//! Three output formats are supported:
//!
//! | Format  | Shape                                                    |
//! |---------|----------------------------------------------------------|
//! | `csv`   | header row + one row per record, RFC 4180 quoting        |
//! | `jsonl` | one serialised [`ProofRecord`] object per line           |
//! | `table` | column-aligned plain text for a terminal                 |
//!
//! Column order is fixed by [`HEADERS`] and matches the spreadsheet the
//! records are pasted into. [`dropdown`] describes the list validations
//! attached to that spreadsheet's stage, language, assembler and QC columns.

pub mod dropdown;

pub use dropdown::{dropdown_columns, DropdownColumn};

use proofsheet_core::ProofRecord;
use std::io::Write;
use thiserror::Error;

/// Spreadsheet column headers, in record field order.
pub const HEADERS: [&str; 8] = [
    "Date",
    "Banner Name",
    "Week",
    "Page Name",
    "Proof",
    "Language",
    "Page Assembler",
    "QC",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to serialise record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown export format {0:?} (expected csv, jsonl or table)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Jsonl,
    Table,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Jsonl => write!(f, "jsonl"),
            ExportFormat::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            "table" | "text" => Ok(ExportFormat::Table),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Write `records` to `out` in `format`.
pub fn write_records<W: Write>(
    records: &[ProofRecord],
    format: ExportFormat,
    mut out: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(records, &mut out)?,
        ExportFormat::Jsonl => write_jsonl(records, &mut out)?,
        ExportFormat::Table => write_table(records, &mut out)?,
    }
    out.flush()?;
    tracing::debug!(%format, records = records.len(), "records exported");
    Ok(())
}

/// Render `records` to a `String`.
pub fn render(records: &[ProofRecord], format: ExportFormat) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_records(records, format, &mut buf)?;
    // Every writer emits UTF-8 built from `&str` cells.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_csv<W: Write>(records: &[ProofRecord], out: &mut W) -> Result<(), ExportError> {
    write_csv_row(out, HEADERS)?;
    for record in records {
        write_csv_row(out, record.cells())?;
    }
    Ok(())
}

fn write_csv_row<W: Write>(out: &mut W, cells: [&str; 8]) -> std::io::Result<()> {
    let row: Vec<String> = cells.iter().map(|c| csv_field(c)).collect();
    writeln!(out, "{}", row.join(","))
}

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn write_jsonl<W: Write>(records: &[ProofRecord], out: &mut W) -> Result<(), ExportError> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn write_table<W: Write>(records: &[ProofRecord], out: &mut W) -> Result<(), ExportError> {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for record in records {
        for (w, cell) in widths.iter_mut().zip(record.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 8]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(HEADERS))?;
    writeln!(
        out,
        "{}",
        widths.map(|w| "-".repeat(w)).join("  ")
    )?;
    for record in records {
        writeln!(out, "{}", line(record.cells()))?;
    }
    Ok(())
}
