//! Generated Name History
//!
//! Keeps the most recent generated names, newest first, and persists them
//! in the same JSON/YAML document format as the custom profile store.
//!
//! ```text
//! generate batch [a, b]          history before [x, y, ...]
//!        \                              /
//!         +--> [a, b, x, y, ...] truncated to HISTORY_LIMIT
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::StoreError;
use super::profile::GeneratedName;
use super::store::{read_document, write_document, StoreResult};

/// Entries kept after each recorded batch.
pub const HISTORY_LIMIT: usize = 100;

/// File name used by `history --export` when none is given.
pub const DEFAULT_EXPORT_FILE: &str = "fantasy-names-history.txt";

// ============================================================================
// History
// ============================================================================

/// Generated names, newest first, at most [`HISTORY_LIMIT`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameHistory {
    entries: Vec<GeneratedName>,
}

impl NameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a batch, keeping its order, then drop the oldest entries.
    pub fn record(&mut self, batch: &[GeneratedName]) {
        if batch.is_empty() {
            return;
        }
        let mut entries = Vec::with_capacity(batch.len() + self.entries.len());
        entries.extend_from_slice(batch);
        entries.append(&mut self.entries);
        entries.truncate(HISTORY_LIMIT);
        self.entries = entries;
    }

    /// Remove the entry at `index` (0 = newest).
    pub fn remove(&mut self, index: usize) -> Option<GeneratedName> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[GeneratedName] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text export, one [`export_line`] per entry.
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(export_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `"{singular} (pl. {plural})"`, plus `" - meaning: {meaning}"` when the
/// name carries a non-empty meaning.
pub fn export_line(name: &GeneratedName) -> String {
    match name.meaning.as_deref().filter(|m| !m.is_empty()) {
        Some(meaning) => format!(
            "{} (pl. {}) - meaning: {}",
            name.singular, name.plural, meaning
        ),
        None => format!("{} (pl. {})", name.singular, name.plural),
    }
}

// ============================================================================
// History Store
// ============================================================================

/// File-backed [`NameHistory`].
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the history. A missing file yields an empty history.
    pub fn load(&self) -> StoreResult<NameHistory> {
        Ok(read_document(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, history: &NameHistory) -> StoreResult<()> {
        write_document(&self.path, history)?;
        log::debug!(
            "Saved name history ({} entries) to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load, prepend `batch`, save. Returns the updated history.
    ///
    /// An unparseable file is left untouched and the error returned.
    pub fn record(&self, batch: &[GeneratedName]) -> StoreResult<NameHistory> {
        let mut history = self.load()?;
        history.record(batch);
        self.save(&history)?;
        Ok(history)
    }

    /// Remove the entry at `index` (0 = newest) and save.
    pub fn remove(&self, index: usize) -> StoreResult<Option<GeneratedName>> {
        let mut history = self.load()?;
        let removed = history.remove(index);
        if removed.is_some() {
            self.save(&history)?;
        }
        Ok(removed)
    }

    /// Delete the history file. A missing file is not an error.
    pub fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Cleared name history at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::write_failed(&self.path, e)),
        }
    }

    /// Write the plain-text export of the stored history to `target`.
    /// Returns the number of exported entries.
    pub fn export_to(&self, target: &Path) -> StoreResult<usize> {
        let history = self.load()?;
        fs::write(target, history.export_text())
            .map_err(|e| StoreError::write_failed(target, e))?;
        log::info!("Exported {} name(s) to {}", history.len(), target.display());
        Ok(history.len())
    }
}
