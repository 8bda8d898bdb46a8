//! FAQ storage backends.
//!
//! `JsonFaqStore` keeps the catalog as a pretty-printed JSON array on disk;
//! `MemoryFaqStore` holds it in memory. Both hand rows to the matcher through
//! [`FaqStore::load_all`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::traits::FaqStore;
use crate::types::{FaqEntry, FaqId, SeedFaq};

pub struct JsonFaqStore {
    path: PathBuf,
}

impl JsonFaqStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Creates an empty store if none exists. Existing rows are left alone.
    pub fn create(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.write_rows(&[])?;
        debug!(path = %self.path.display(), "created empty FAQ store");
        Ok(())
    }

    /// Inserts `seeds` with sequential ids starting at 1, but only into an empty
    /// store. Returns the number of rows added.
    pub fn populate(&self, seeds: &[SeedFaq]) -> Result<usize> {
        self.create()?;
        let existing = self.read_rows()?;
        if !existing.is_empty() {
            info!(count = existing.len(), "FAQs already exist in store");
            return Ok(0);
        }
        let rows: Vec<FaqEntry> = seeds
            .iter()
            .zip(1..)
            .map(|(s, id)| FaqEntry::new(id, s.question, s.answer, s.category))
            .collect();
        self.write_rows(&rows)?;
        info!(count = rows.len(), path = %self.path.display(), "populated FAQ store");
        Ok(rows.len())
    }

    fn read_rows(&self) -> Result<Vec<FaqEntry>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(self.path.display().to_string()),
            _ => Error::Io(e),
        })?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<FaqEntry> = serde_json::from_str(&raw)
            .map_err(|e| Error::Store(format!("{}: {}", self.path.display(), e)))?;
        Ok(rows)
    }

    fn write_rows(&self, rows: &[FaqEntry]) -> Result<()> {
        let body = serde_json::to_string_pretty(rows)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}

impl FaqStore for JsonFaqStore {
    fn load_all(&self) -> Result<Vec<FaqEntry>> {
        self.read_rows()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFaqStore {
    rows: Vec<FaqEntry>,
}

impl MemoryFaqStore {
    pub fn new(rows: Vec<FaqEntry>) -> Self {
        Self { rows }
    }

    pub fn from_seeds(seeds: &[SeedFaq]) -> Self {
        let rows = seeds
            .iter()
            .zip(1..)
            .map(|(s, id): (&SeedFaq, FaqId)| FaqEntry::new(id, s.question, s.answer, s.category))
            .collect();
        Self { rows }
    }
}

impl FaqStore for MemoryFaqStore {
    fn load_all(&self) -> Result<Vec<FaqEntry>> {
        Ok(self.rows.clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.rows.len())
    }
}
