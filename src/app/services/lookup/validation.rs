//! Student ID format validation

use crate::constants::STUDENT_ID_LENGTH;

/// Check whether a student ID is exactly 12 ASCII digits
///
/// Length is measured in bytes, so any non-ASCII character fails the check.
/// Leading zeros are allowed.
pub fn is_valid_student_id(student_id: &str) -> bool {
    student_id.len() == STUDENT_ID_LENGTH && student_id.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_student_id("202501010001"));
        assert!(is_valid_student_id("000000000000"));
        assert!(is_valid_student_id("012345678901"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_student_id(""));
        assert!(!is_valid_student_id("12345"));
        assert!(!is_valid_student_id("20250101000"));
        assert!(!is_valid_student_id("2025010100011"));
    }

    #[test]
    fn test_non_digits() {
        assert!(!is_valid_student_id("20250101000a"));
        assert!(!is_valid_student_id("2025 1010001"));
        assert!(!is_valid_student_id("-20250101000"));
        assert!(!is_valid_student_id("2025010100.1"));
    }

    #[test]
    fn test_non_ascii_digits() {
        // Full-width digits are multi-byte and not ASCII
        assert!(!is_valid_student_id("２０２５０１０１０００１"));
        // Four 3-byte characters make 12 bytes but are not digits
        assert!(!is_valid_student_id("学号学号"));
    }
}
