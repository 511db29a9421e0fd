//! Calculation history persistence.
//!
//! The history is a JSON array of entries kept fully in memory and rewritten
//! in full after every mutation. Loading never fails: a missing, unreadable
//! or corrupted file yields an empty history. Saving is best effort for
//! `append`/`clear`; errors are logged and the in-memory state is kept.

use crate::config::HistoryConfig;
use crate::types::entry_date;
use crate::{calculator, BmiResult, Category, HistoryEntry, Measurement, Result, UnitSystem};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// On-disk record format
///
/// Older files may omit `category`; it is derived from `bmi` when missing.
#[derive(Debug, Deserialize)]
struct StoredEntry {
    #[serde(with = "entry_date")]
    date: NaiveDateTime,
    weight: f64,
    height: f64,
    bmi: f64,
    unit: UnitSystem,
    category: Option<Category>,
}

impl From<StoredEntry> for HistoryEntry {
    fn from(stored: StoredEntry) -> Self {
        let category = stored
            .category
            .unwrap_or_else(|| calculator::classify_bmi(stored.bmi).category);

        HistoryEntry {
            date: stored.date,
            weight: stored.weight,
            height: stored.height,
            bmi: stored.bmi,
            unit: stored.unit,
            category,
        }
    }
}

/// Read history entries from `path`
///
/// Returns an empty list if the file doesn't exist.
/// If the file can't be read or parsed, logs a warning and returns an empty list.
pub fn load(path: &Path) -> Vec<HistoryEntry> {
    if !path.exists() {
        tracing::info!("No history file found at {:?}, starting empty", path);
        return Vec::new();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(
                "Failed to read history file {:?}: {}. Starting empty.",
                path,
                e
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<StoredEntry>>(&contents) {
        Ok(stored) => {
            let entries: Vec<HistoryEntry> = stored.into_iter().map(HistoryEntry::from).collect();
            tracing::debug!("Loaded {} history entries from {:?}", entries.len(), path);
            entries
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse history file {:?}: {}. Starting empty.",
                path,
                e
            );
            Vec::new()
        }
    }
}

/// Atomically replace `path` with the pretty-printed `entries`
///
/// Writes to a temp file in the same directory, syncs it, then renames it
/// over the original.
fn write_entries(path: &Path, entries: &[HistoryEntry]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| crate::Error::Io(e.error))?;
    tracing::debug!("Saved {} history entries to {:?}", entries.len(), path);
    Ok(())
}

/// Current local time at minute precision, matching the stored format
fn now_to_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Owner of the history list and its backing file
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    max_entries: usize,
    auto_save: bool,
}

impl HistoryStore {
    /// Open the store at `path`, loading whatever history is there
    pub fn open(path: impl Into<PathBuf>, config: &HistoryConfig) -> Self {
        let path = path.into();
        let entries = load(&path);
        Self {
            path,
            entries,
            max_entries: config.max_entries,
            auto_save: config.auto_save,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `n` entries, most recent first
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Record a calculation for `measurement`
    ///
    /// The BMI and category are computed here so a stored entry always
    /// agrees with its weight and height. Fails only if the height is not
    /// positive, in which case nothing is recorded.
    pub fn append(&mut self, measurement: &Measurement) -> Result<HistoryEntry> {
        self.append_at(measurement, now_to_minute())
    }

    fn append_at(&mut self, measurement: &Measurement, date: NaiveDateTime) -> Result<HistoryEntry> {
        let result = BmiResult::from_measurement(measurement)?;
        let entry = HistoryEntry {
            date,
            weight: measurement.weight_kg,
            height: measurement.height_cm,
            bmi: result.bmi,
            unit: measurement.unit,
            category: result.category,
        };

        self.entries.push(entry.clone());
        self.enforce_cap();
        tracing::info!(
            "Recorded BMI {} ({}) in history, {} entries",
            entry.bmi,
            entry.category,
            self.entries.len()
        );

        self.autosave();
        Ok(entry)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        tracing::info!("Cleared {} history entries", removed);
        self.autosave();
    }

    /// Write the current history to disk, propagating any error
    pub fn save(&self) -> Result<()> {
        write_entries(&self.path, &self.entries)
    }

    fn autosave(&self) {
        if !self.auto_save {
            return;
        }
        if let Err(e) = self.save() {
            tracing::warn!(
                "Failed to save history to {:?}: {}. Keeping in-memory history.",
                self.path,
                e
            );
        }
    }

    fn enforce_cap(&mut self) {
        if self.max_entries == 0 || self.entries.len() <= self.max_entries {
            return;
        }
        let excess = self.entries.len() - self.max_entries;
        self.entries.drain(..excess);
        tracing::debug!("Dropped {} oldest history entries", excess);
    }
}
