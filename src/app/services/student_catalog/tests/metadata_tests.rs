//! Tests for student catalog metadata and statistics

use super::create_test_student;
use crate::app::services::student_catalog::{
    SkipReason, StudentCatalog,
    metadata::{CatalogMetadata, LoadStats},
};
use chrono::Utc;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[test]
fn test_load_stats_new() {
    let stats = LoadStats::new();
    assert_eq!(stats.files_discovered, 0);
    assert_eq!(stats.files_loaded, 0);
    assert_eq!(stats.records_loaded, 0);
    assert_eq!(stats.skip_count(), 0);
    assert_eq!(stats.skip_rate(), 0.0);
    assert_eq!(stats.load_duration, Duration::ZERO);
    assert!(!stats.has_errors());
}

#[test]
fn test_load_stats_default() {
    let stats = LoadStats::default();
    assert_eq!(stats.rows_seen, 0);
    assert_eq!(stats.unreachable_ids, 0);
    assert!(stats.errors.is_empty());
}

#[test]
fn test_record_skip() {
    let mut stats = LoadStats::new();
    stats.record_skip(&SkipReason::Header);
    stats.record_skip(&SkipReason::Incomplete { found: 2 });
    stats.record_skip(&SkipReason::Incomplete { found: 5 });
    stats.record_skip(&SkipReason::MissingIdentity);
    stats.record_skip(&SkipReason::InvalidStudentId);

    assert_eq!(stats.rows_incomplete, 2);
    assert_eq!(stats.rows_missing_identity, 1);
    assert_eq!(stats.rows_invalid_id, 1);
    assert_eq!(stats.skip_count(), 4);
}

#[test]
fn test_load_stats_summary() {
    let mut stats = LoadStats::new();
    stats.files_discovered = 3;
    stats.files_loaded = 2;
    stats.rows_seen = 200;
    stats.records_loaded = 150;
    stats.rows_incomplete = 30;
    stats.rows_missing_identity = 20;
    stats.load_duration = Duration::from_millis(1500);

    assert_eq!(stats.skip_rate(), 25.0);

    let summary = stats.summary();
    assert!(summary.contains("150 records"));
    assert!(summary.contains("2/3 files"));
    assert!(summary.contains("50 rows skipped"));
    assert!(summary.contains("25.0%"));
    assert!(summary.contains("1.50s"));

    stats.errors.push("broken.xlsx: open failed".to_string());
    assert!(stats.has_errors());
}

#[test]
fn test_catalog_metadata() {
    let catalog = StudentCatalog::build(
        PathBuf::from("/srv/admission"),
        vec![
            create_test_student("202501010001", "张三", "计算机科学与技术"),
            create_test_student("202502020002", "李四", "英语"),
        ],
        vec![PathBuf::from("/srv/admission/2025.xlsx")],
    );

    let metadata = catalog.metadata();
    assert_eq!(metadata.record_count, 2);
    assert_eq!(metadata.files_loaded(), 1);
    assert_eq!(metadata.source_dir, PathBuf::from("/srv/admission"));
    assert!(metadata.age() < Duration::from_secs(5));

    let summary = metadata.summary();
    assert!(summary.contains("2 records"));
    assert!(summary.contains("1 files"));
    assert!(summary.contains("/srv/admission"));
}

#[test]
fn test_metadata_without_sources() {
    let metadata = CatalogMetadata {
        source_dir: PathBuf::new(),
        source_files: Vec::new(),
        record_count: 0,
        load_time: Instant::now(),
        loaded_at: Utc::now(),
    };

    assert_eq!(metadata.files_loaded(), 0);
    assert!(metadata.summary().contains("0 records"));
}
