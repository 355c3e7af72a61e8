//! Shared test utilities and fixtures for student catalog tests

use crate::app::models::Student;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};

pub mod metadata_tests;
pub mod parser_tests;
pub mod query_tests;

/// Column header row as it appears in the admission workbooks
pub const HEADER_ROW: &[&str] = &["入学年份", "学院", "班级", "学号", "姓名", "专业"];

/// Create a test student with standard filler fields
pub fn create_test_student(student_id: &str, name: &str, major: &str) -> Student {
    Student::new("2025", "计算机学院", "计科2501", student_id, name, major).unwrap()
}

/// Convert string slices into an owned row
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|field| field.to_string()).collect()
}

/// Write a workbook with the given sheets of string cells
///
/// Empty strings are left as blank cells rather than written as empty text.
pub fn write_workbook(path: &Path, sheets: &[(&str, &[&[&str]])]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    for (sheet_name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*sheet_name)?;

        for (row_idx, fields) in rows.iter().enumerate() {
            for (col, value) in fields.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(row_idx as u32, col as u16, *value)?;
                }
            }
        }
    }

    workbook.save(path)
}

/// Write a single-sheet admission workbook with a header row
pub fn create_admission_workbook(
    dir: &Path,
    filename: &str,
    students: &[&[&str]],
) -> Result<PathBuf, XlsxError> {
    let path = dir.join(filename);
    let mut rows: Vec<&[&str]> = vec![HEADER_ROW];
    rows.extend_from_slice(students);
    write_workbook(&path, &[("学生信息", rows.as_slice())])?;
    Ok(path)
}

/// Write a workbook whose student IDs are stored as numeric cells
pub fn create_numeric_id_workbook(
    dir: &Path,
    filename: &str,
    students: &[(f64, &str, &str)],
) -> Result<PathBuf, XlsxError> {
    let path = dir.join(filename);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADER_ROW.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row_idx, (student_id, name, major)) in students.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_number(row, 0, 2025.0)?;
        worksheet.write_string(row, 1, "计算机学院")?;
        worksheet.write_string(row, 2, "计科2501")?;
        worksheet.write_number(row, 3, *student_id)?;
        worksheet.write_string(row, 4, *name)?;
        worksheet.write_string(row, 5, *major)?;
    }

    workbook.save(&path)?;
    Ok(path)
}

/// Standard admitted students used across loader tests
pub const ZHANG_SAN: &[&str] = &[
    "2025",
    "计算机学院",
    "计科2501",
    "202501010001",
    "张三",
    "计算机科学与技术",
];

pub const LI_SI: &[&str] = &[
    "2025",
    "外国语学院",
    "英语2502",
    "202502020002",
    "李四",
    "英语",
];

pub const WANG_WU: &[&str] = &[
    "2025",
    "数学学院",
    "数学2503",
    "202503030003",
    "王五",
    "数学与应用数学",
];
