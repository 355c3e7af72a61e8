//! Student lookup functionality
//!
//! Lookups are linear scans over the records in load order. The catalog is
//! small enough that no secondary index is kept.

use super::StudentCatalog;
use crate::app::models::Student;
use std::collections::BTreeMap;

impl StudentCatalog {
    /// Find the record matching a (student ID, name) pair
    ///
    /// Both values are compared byte for byte and are not trimmed. When the
    /// pair occurs more than once, the record loaded first wins.
    pub fn lookup(&self, student_id: &str, name: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.matches(student_id, name))
    }

    /// Iterate over all records in load order
    pub fn records(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Find every record carrying the given student ID
    pub fn find_by_student_id(&self, student_id: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|student| student.student_id == student_id)
            .collect()
    }

    /// Count records per college, sorted by college name
    pub fn count_by_college(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for student in &self.students {
            *counts.entry(student.college.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Find (student ID, name) pairs that occur more than once
    ///
    /// Only the first occurrence of such a pair can ever be returned by
    /// `lookup`. Pairs are listed in order of first appearance.
    pub fn duplicate_identities(&self) -> Vec<(&str, &str, usize)> {
        let mut seen: Vec<(&str, &str, usize)> = Vec::new();
        let mut positions: BTreeMap<(&str, &str), usize> = BTreeMap::new();

        for student in &self.students {
            let key = (student.student_id.as_str(), student.name.as_str());
            match positions.get(&key) {
                Some(&position) => seen[position].2 += 1,
                None => {
                    positions.insert(key, seen.len());
                    seen.push((key.0, key.1, 1));
                }
            }
        }

        seen.retain(|(_, _, count)| *count > 1);
        seen
    }
}
