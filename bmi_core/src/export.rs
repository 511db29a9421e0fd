//! CSV export of calculation history.

use crate::{HistoryEntry, Result};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    date: String,
    weight: f64,
    height: f64,
    bmi: f64,
    unit: &'a str,
    category: &'a str,
}

impl<'a> From<&'a HistoryEntry> for CsvRow<'a> {
    fn from(entry: &'a HistoryEntry) -> Self {
        CsvRow {
            date: entry.date_string(),
            weight: entry.weight,
            height: entry.height,
            bmi: entry.bmi,
            unit: entry.unit.as_str(),
            category: entry.category.label(),
        }
    }
}

/// Write `entries` to a CSV file at `path`, replacing any existing file
///
/// Headers are always written, even for an empty history. Returns the
/// number of rows written.
pub fn write_csv(entries: &[HistoryEntry], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(["date", "weight", "height", "bmi", "unit", "category"])?;

    for entry in entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    writer.flush()?;
    tracing::info!("Exported {} history entries to {:?}", entries.len(), path);
    Ok(entries.len())
}
