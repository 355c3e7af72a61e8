//! Tests for student catalog lookup functionality

use super::create_test_student;
use crate::app::services::student_catalog::StudentCatalog;

fn create_test_catalog() -> StudentCatalog {
    StudentCatalog::from_records(vec![
        create_test_student("202501010001", "张三", "计算机科学与技术"),
        create_test_student("202502020002", "李四", "英语"),
        create_test_student("202501010001", "张三", "软件工程"),
        create_test_student("202503030003", "王五", "数学与应用数学"),
    ])
}

#[test]
fn test_lookup_found() {
    let catalog = create_test_catalog();
    let student = catalog.lookup("202502020002", "李四").unwrap();
    assert_eq!(student.major, "英语");
}

#[test]
fn test_lookup_first_match_wins() {
    let catalog = create_test_catalog();
    let student = catalog.lookup("202501010001", "张三").unwrap();
    assert_eq!(student.major, "计算机科学与技术");
}

#[test]
fn test_lookup_requires_both_fields() {
    let catalog = create_test_catalog();
    assert!(catalog.lookup("202501010001", "李四").is_none());
    assert!(catalog.lookup("202502020002", "张三").is_none());
    assert!(catalog.lookup("209999999999", "无名").is_none());
}

#[test]
fn test_lookup_does_not_trim_query() {
    let catalog = create_test_catalog();
    assert!(catalog.lookup("202501010001", " 张三").is_none());
    assert!(catalog.lookup(" 202501010001", "张三").is_none());
}

#[test]
fn test_lookup_on_empty_catalog() {
    let catalog = StudentCatalog::from_records(Vec::new());
    assert!(catalog.is_empty());
    assert!(catalog.lookup("202501010001", "张三").is_none());
}

#[test]
fn test_records_in_load_order() {
    let catalog = create_test_catalog();
    let ids: Vec<&str> = catalog.records().map(|s| s.student_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["202501010001", "202502020002", "202501010001", "202503030003"]
    );
    assert_eq!(catalog.record_count(), 4);
}

#[test]
fn test_find_by_student_id() {
    let catalog = create_test_catalog();
    assert_eq!(catalog.find_by_student_id("202501010001").len(), 2);
    assert_eq!(catalog.find_by_student_id("202503030003").len(), 1);
    assert!(catalog.find_by_student_id("000000000000").is_empty());
}

#[test]
fn test_duplicate_identities() {
    let catalog = create_test_catalog();
    let duplicates = catalog.duplicate_identities();
    assert_eq!(duplicates, vec![("202501010001", "张三", 2)]);
}

#[test]
fn test_count_by_college() {
    let mut students = vec![
        create_test_student("202501010001", "张三", "计算机科学与技术"),
        create_test_student("202501010002", "赵六", "软件工程"),
    ];
    let mut other = create_test_student("202502020002", "李四", "英语");
    other.college = "外国语学院".to_string();
    students.push(other);

    let catalog = StudentCatalog::from_records(students);
    let counts = catalog.count_by_college();
    assert_eq!(counts.get("计算机学院"), Some(&2));
    assert_eq!(counts.get("外国语学院"), Some(&1));
}
