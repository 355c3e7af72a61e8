//! Student row parsing from worksheet data
//!
//! Rows arrive as positional string fields in the fixed column order
//! year, college, class, student ID, name, major. Parsing never fails: every
//! row is either admitted as a record or skipped with a reason.

use crate::app::models::Student;
use crate::app::services::lookup::validation::is_valid_student_id;
use crate::constants::{MIN_ROW_FIELDS, columns};
use std::fmt;
use tracing::debug;

/// Outcome of parsing one worksheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row produced a record
    Admitted(Student),

    /// Row was skipped
    Skipped(SkipReason),
}

/// Why a row did not produce a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// First row of a sheet, treated as the column header
    Header,

    /// Row has fewer than the required number of fields
    Incomplete { found: usize },

    /// Trimmed student ID or name is empty
    MissingIdentity,

    /// Student ID is not 12 ASCII digits (strict mode only)
    InvalidStudentId,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Header => write!(f, "header row"),
            SkipReason::Incomplete { found } => write!(
                f,
                "row incomplete ({} of {} fields)",
                found, MIN_ROW_FIELDS
            ),
            SkipReason::MissingIdentity => write!(f, "missing student ID or name"),
            SkipReason::InvalidStudentId => write!(f, "malformed student ID"),
        }
    }
}

impl RowOutcome {
    /// Get the admitted record, if any
    pub fn student(&self) -> Option<&Student> {
        match self {
            RowOutcome::Admitted(student) => Some(student),
            RowOutcome::Skipped(_) => None,
        }
    }

    /// Check whether the row was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, RowOutcome::Skipped(_))
    }
}

/// Parse one worksheet row into a student record
///
/// # Arguments
/// * `row` - Positional fields of the row, trailing empty cells already dropped
/// * `index` - Zero-based row index within its sheet
///
/// # Returns
/// `RowOutcome::Admitted` for a usable row, otherwise the reason it was skipped.
/// Extra columns beyond the sixth are ignored.
pub fn parse_student_row(row: &[String], index: usize) -> RowOutcome {
    if index == 0 {
        return RowOutcome::Skipped(SkipReason::Header);
    }

    if row.len() < MIN_ROW_FIELDS {
        debug!(
            "Row {} incomplete: {} of {} fields",
            index + 1,
            row.len(),
            MIN_ROW_FIELDS
        );
        return RowOutcome::Skipped(SkipReason::Incomplete { found: row.len() });
    }

    match Student::new(
        &row[columns::ADMISSION_YEAR],
        &row[columns::COLLEGE],
        &row[columns::CLASS_NAME],
        &row[columns::STUDENT_ID],
        &row[columns::NAME],
        &row[columns::MAJOR],
    ) {
        Ok(student) => RowOutcome::Admitted(student),
        Err(e) => {
            debug!("Row {} skipped: {}", index + 1, e);
            RowOutcome::Skipped(SkipReason::MissingIdentity)
        }
    }
}

/// Parse a row and additionally reject student IDs that can never be queried
pub fn parse_student_row_strict(row: &[String], index: usize) -> RowOutcome {
    match parse_student_row(row, index) {
        RowOutcome::Admitted(student) if !is_valid_student_id(&student.student_id) => {
            debug!(
                "Row {} skipped: malformed student ID '{}'",
                index + 1,
                student.student_id
            );
            RowOutcome::Skipped(SkipReason::InvalidStudentId)
        }
        outcome => outcome,
    }
}
