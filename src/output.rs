//! Presentation-side helpers: JSON pretty-printing and CSV export.
//!
//! The analyzers return structured values; everything here only renders or
//! persists those values and is kept out of the core computation path.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One exported row: a student with their rounded average and GPA.
#[derive(Debug, Serialize)]
pub struct AverageRow {
    pub id: u32,
    pub name: String,
    pub average: f64,
    pub gpa: f64,
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Appends an [`AverageRow`] to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_summary(path: &str, row: &AverageRow) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}
