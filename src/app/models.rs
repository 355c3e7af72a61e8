//! Data models for admission lookups
//!
//! This module contains the admitted-student record loaded from the source
//! workbooks and the identity query checked against it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Student Record
// =============================================================================

/// One admitted student as listed in an admission workbook
///
/// All fields are stored trimmed. `student_id` and `name` are never empty for
/// a record held by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Student {
    /// Admission year as written in the sheet (e.g., "2025")
    pub admission_year: String,

    /// College the student was admitted to
    pub college: String,

    /// Assigned class
    pub class_name: String,

    /// Student ID, expected to be 12 ASCII digits
    pub student_id: String,

    /// Full name
    pub name: String,

    /// Admitted major, the only field disclosed by a lookup
    pub major: String,
}

impl Student {
    /// Create a new record, trimming every field
    ///
    /// # Errors
    /// * Returns `Error::DataValidation` if the trimmed student ID or name is empty
    pub fn new(
        admission_year: &str,
        college: &str,
        class_name: &str,
        student_id: &str,
        name: &str,
        major: &str,
    ) -> Result<Self> {
        let student = Self {
            admission_year: admission_year.trim().to_string(),
            college: college.trim().to_string(),
            class_name: class_name.trim().to_string(),
            student_id: student_id.trim().to_string(),
            name: name.trim().to_string(),
            major: major.trim().to_string(),
        };

        student.validate()?;
        Ok(student)
    }

    /// Check the identity invariant
    pub fn validate(&self) -> Result<()> {
        if self.student_id.is_empty() {
            return Err(Error::data_validation("Student ID must not be empty"));
        }
        if self.name.is_empty() {
            return Err(Error::data_validation("Student name must not be empty"));
        }
        Ok(())
    }

    /// Whether this record matches the pair exactly (byte equality, no trimming)
    pub fn matches(&self, student_id: &str, name: &str) -> bool {
        self.student_id == student_id && self.name == name
    }
}

// =============================================================================
// Identity Query
// =============================================================================

/// Identity pair submitted by a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudentQuery {
    /// Claimed student ID
    pub student_id: String,

    /// Claimed name
    pub name: String,
}

impl StudentQuery {
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
        }
    }

    /// Whether either half of the pair is missing
    pub fn is_incomplete(&self) -> bool {
        self.student_id.is_empty() || self.name.is_empty()
    }
}
