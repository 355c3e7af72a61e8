//! Lookup service for verifying admitted students
//!
//! Validates the shape of a query, consults the catalog and maps the outcome to
//! a `LookupResponse`. Only the major of a matched record is ever disclosed.

use crate::app::models::StudentQuery;
use crate::app::services::student_catalog::StudentCatalog;
use std::sync::Arc;
use tracing::debug;

pub mod response;
pub mod validation;

pub use response::{LookupResponse, ResponseCode};
pub use validation::is_valid_student_id;

/// Verifies (student ID, name) pairs against a shared catalog
#[derive(Debug, Clone)]
pub struct LookupService {
    catalog: Arc<StudentCatalog>,
}

impl LookupService {
    pub fn new(catalog: Arc<StudentCatalog>) -> Self {
        Self { catalog }
    }

    /// Answer a lookup
    ///
    /// Checks run in order: both fields present, student ID format, catalog
    /// match. The catalog is not consulted for a rejected query.
    pub fn search(&self, query: &StudentQuery) -> LookupResponse {
        if query.is_incomplete() {
            debug!("Lookup rejected: missing student_id or name");
            return LookupResponse::missing_parameters();
        }

        if !is_valid_student_id(&query.student_id) {
            debug!("Lookup rejected: malformed student ID '{}'", query.student_id);
            return LookupResponse::invalid_student_id();
        }

        match self.catalog.lookup(&query.student_id, &query.name) {
            Some(student) => {
                debug!("Lookup matched student ID {}", query.student_id);
                LookupResponse::found(student.major.clone())
            }
            None => {
                debug!("Lookup found no match for student ID {}", query.student_id);
                LookupResponse::not_admitted()
            }
        }
    }

    /// Number of records available for lookups
    pub fn record_count(&self) -> usize {
        self.catalog.record_count()
    }
}
