//! Student catalog metadata and statistics tracking
//!
//! This module defines the data structures for tracking catalog loading
//! statistics and describing a loaded catalog.

use super::parser::SkipReason;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Statistics about the catalog loading process
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of files matching the source pattern
    pub files_discovered: usize,

    /// Number of files read successfully (including files with no valid rows)
    pub files_loaded: usize,

    /// Number of files skipped because they could not be read
    pub files_failed: usize,

    /// Number of data rows examined (header rows excluded)
    pub rows_seen: usize,

    /// Number of records admitted into the catalog
    pub records_loaded: usize,

    /// Rows with fewer than the required number of fields
    pub rows_incomplete: usize,

    /// Rows with an empty student ID or name
    pub rows_missing_identity: usize,

    /// Rows skipped for a malformed student ID (strict mode only)
    pub rows_invalid_id: usize,

    /// Admitted records whose student ID can never pass query validation
    pub unreachable_ids: usize,

    /// Time taken to load the catalog
    pub load_duration: Duration,

    /// Any per-file errors encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            files_discovered: 0,
            files_loaded: 0,
            files_failed: 0,
            rows_seen: 0,
            records_loaded: 0,
            rows_incomplete: 0,
            rows_missing_identity: 0,
            rows_invalid_id: 0,
            unreachable_ids: 0,
            load_duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Count a skipped row under its reason
    pub fn record_skip(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::Header => {}
            SkipReason::Incomplete { .. } => self.rows_incomplete += 1,
            SkipReason::MissingIdentity => self.rows_missing_identity += 1,
            SkipReason::InvalidStudentId => self.rows_invalid_id += 1,
        }
    }

    /// Total number of data rows that did not become records
    pub fn skip_count(&self) -> usize {
        self.rows_incomplete + self.rows_missing_identity + self.rows_invalid_id
    }

    /// Calculate the share of examined rows that were skipped, as a percentage
    pub fn skip_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            (self.skip_count() as f64 / self.rows_seen as f64) * 100.0
        }
    }

    /// Check if any errors occurred during loading
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} records from {}/{} files ({} rows skipped, {:.1}%) in {:.2}s",
            self.records_loaded,
            self.files_loaded,
            self.files_discovered,
            self.skip_count(),
            self.skip_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a loaded student catalog
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// Directory the records were loaded from
    pub source_dir: PathBuf,

    /// Workbooks that contributed to the catalog
    pub source_files: Vec<PathBuf>,

    /// Total number of records in the catalog
    pub record_count: usize,

    /// When the load started
    pub load_time: Instant,

    /// Wall-clock time the catalog was built
    pub loaded_at: DateTime<Utc>,
}

impl CatalogMetadata {
    /// Number of files read during loading
    pub fn files_loaded(&self) -> usize {
        self.source_files.len()
    }

    /// Get the age of the catalog since loading
    pub fn age(&self) -> Duration {
        self.load_time.elapsed()
    }

    /// Get a summary string of the catalog
    pub fn summary(&self) -> String {
        format!(
            "Catalog with {} records from {} files in {} (loaded {})",
            self.record_count,
            self.files_loaded(),
            self.source_dir.display(),
            self.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
