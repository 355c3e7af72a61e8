//! Tests for student row parsing

use super::row;
use crate::app::services::student_catalog::parser::*;

#[test]
fn test_parse_valid_row() {
    let fields = row(&[
        "2025",
        "计算机学院",
        "计科2501",
        "202501010001",
        "张三",
        "计算机科学与技术",
    ]);

    let outcome = parse_student_row(&fields, 1);
    let student = outcome.student().unwrap();
    assert_eq!(student.admission_year, "2025");
    assert_eq!(student.college, "计算机学院");
    assert_eq!(student.class_name, "计科2501");
    assert_eq!(student.student_id, "202501010001");
    assert_eq!(student.name, "张三");
    assert_eq!(student.major, "计算机科学与技术");
}

#[test]
fn test_header_row_always_skipped() {
    let fields = row(&["2025", "A", "B", "202501010001", "张三", "C"]);
    assert_eq!(
        parse_student_row(&fields, 0),
        RowOutcome::Skipped(SkipReason::Header)
    );
}

#[test]
fn test_short_rows_rejected() {
    for len in 0..6 {
        let all = ["2025", "A", "B", "202501010001", "张三", "C"];
        let fields = row(&all[..len]);
        assert_eq!(
            parse_student_row(&fields, 3),
            RowOutcome::Skipped(SkipReason::Incomplete { found: len })
        );
    }
}

#[test]
fn test_fields_are_trimmed() {
    let fields = row(&[" 2025", " A ", "B\t", "  202501010001 ", " 张三", " 计算机 "]);
    let outcome = parse_student_row(&fields, 1);
    let student = outcome.student().unwrap();
    assert_eq!(student.student_id, "202501010001");
    assert_eq!(student.name, "张三");
    assert_eq!(student.major, "计算机");
    assert_eq!(student.college, "A");
}

#[test]
fn test_missing_identity_rejected() {
    let blank_id = row(&["2025", "A", "B", "   ", "张三", "C"]);
    assert_eq!(
        parse_student_row(&blank_id, 2),
        RowOutcome::Skipped(SkipReason::MissingIdentity)
    );

    let blank_name = row(&["2025", "A", "B", "202501010001", "", "C"]);
    assert_eq!(
        parse_student_row(&blank_name, 2),
        RowOutcome::Skipped(SkipReason::MissingIdentity)
    );
}

#[test]
fn test_extra_columns_ignored() {
    let fields = row(&["2025", "A", "B", "202501010001", "张三", "C", "备注", "extra"]);
    let outcome = parse_student_row(&fields, 5);
    assert_eq!(outcome.student().unwrap().major, "C");
}

#[test]
fn test_malformed_id_admitted_by_default() {
    let fields = row(&["2025", "A", "B", "2025-0001", "张三", "C"]);
    let outcome = parse_student_row(&fields, 1);
    assert!(!outcome.is_skipped());
    assert_eq!(outcome.student().unwrap().student_id, "2025-0001");
}

#[test]
fn test_strict_mode_rejects_malformed_id() {
    let fields = row(&["2025", "A", "B", "2025-0001", "张三", "C"]);
    assert_eq!(
        parse_student_row_strict(&fields, 1),
        RowOutcome::Skipped(SkipReason::InvalidStudentId)
    );

    let valid = row(&["2025", "A", "B", "202501010001", "张三", "C"]);
    assert!(!parse_student_row_strict(&valid, 1).is_skipped());

    // Reasons other than the ID format are reported unchanged
    let short = row(&["2025", "A"]);
    assert_eq!(
        parse_student_row_strict(&short, 1),
        RowOutcome::Skipped(SkipReason::Incomplete { found: 2 })
    );
}

#[test]
fn test_skip_reason_display() {
    assert_eq!(
        SkipReason::Incomplete { found: 3 }.to_string(),
        "row incomplete (3 of 6 fields)"
    );
    assert_eq!(
        SkipReason::MissingIdentity.to_string(),
        "missing student ID or name"
    );
}
