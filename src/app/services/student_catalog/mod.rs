//! Student catalog service for admission lookups
//!
//! This module loads admitted-student records from the admission workbooks in a
//! data directory and holds them as an ordered, read-only snapshot. Lookups scan
//! the snapshot in load order and return the first exact (ID, name) match.

use crate::app::models::Student;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Instant;

pub mod loader;
pub mod metadata;
pub mod parser;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::LoaderOptions;
pub use metadata::{CatalogMetadata, LoadStats};
pub use parser::{RowOutcome, SkipReason};

/// In-memory catalog of admitted students
///
/// The catalog is built once and never mutated afterwards. Share it across
/// request handlers behind an `Arc`; replacing the data means building a new
/// catalog.
#[derive(Debug, Clone)]
pub struct StudentCatalog {
    /// Records in file-discovery order, then row order
    pub(crate) students: Vec<Student>,

    /// Directory the records were loaded from
    pub(crate) source_dir: PathBuf,

    /// Workbooks that contributed to the catalog
    pub(crate) source_files: Vec<PathBuf>,

    /// Monotonic instant the load started
    pub(crate) load_time: Instant,

    /// Wall-clock time the catalog was built
    pub(crate) loaded_at: DateTime<Utc>,
}

impl StudentCatalog {
    /// Create a new empty catalog for the given source directory
    pub fn new(source_dir: PathBuf) -> Self {
        Self {
            students: Vec::new(),
            source_dir,
            source_files: Vec::new(),
            load_time: Instant::now(),
            loaded_at: Utc::now(),
        }
    }

    /// Build a catalog from records already in load order
    pub fn build(source_dir: PathBuf, students: Vec<Student>, source_files: Vec<PathBuf>) -> Self {
        Self {
            students,
            source_files,
            ..Self::new(source_dir)
        }
    }

    /// Build a catalog that is not backed by any source directory
    pub fn from_records(students: Vec<Student>) -> Self {
        Self::build(PathBuf::new(), students, Vec::new())
    }

    /// Number of records held
    pub fn record_count(&self) -> usize {
        self.students.len()
    }

    /// Check whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source_dir: self.source_dir.clone(),
            source_files: self.source_files.clone(),
            record_count: self.students.len(),
            load_time: self.load_time,
            loaded_at: self.loaded_at,
        }
    }
}
