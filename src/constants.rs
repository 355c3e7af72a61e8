//! Application constants for the admission lookup service
//!
//! This module contains the default values, source layout rules and wire
//! codes used throughout the service.

// =============================================================================
// Source Discovery
// =============================================================================

/// Default directory scanned for admission workbooks
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default file pattern for admission workbooks (flat, non-recursive)
pub const SOURCE_FILE_PATTERN: &str = "*.xlsx";

/// Sheet name preferred over the first sheet when present
pub const PREFERRED_SHEET_NAME: &str = "学生信息";

// =============================================================================
// Record Layout
// =============================================================================

/// Minimum number of positional fields in a usable row
pub const MIN_ROW_FIELDS: usize = 6;

/// Positional column indices of a student row
pub mod columns {
    pub const ADMISSION_YEAR: usize = 0;
    pub const COLLEGE: usize = 1;
    pub const CLASS_NAME: usize = 2;
    pub const STUDENT_ID: usize = 3;
    pub const NAME: usize = 4;
    pub const MAJOR: usize = 5;
}

/// Exact byte length of a well-formed student ID
pub const STUDENT_ID_LENGTH: usize = 12;

// =============================================================================
// Response Codes and Messages
// =============================================================================

/// Application-level result codes carried in every lookup response
pub mod codes {
    /// Pair verified, major disclosed
    pub const OK: u32 = 200;

    /// Pair not present in the catalog
    pub const NOT_ADMITTED: u32 = 200001;

    /// Request shape or student ID format rejected
    pub const BAD_REQUEST: u32 = 200500;
}

/// Response messages returned to clients
pub mod messages {
    pub const FOUND: &str = "查询成功";
    pub const NOT_ADMITTED: &str = "非新生";
    pub const INVALID_BODY_PREFIX: &str = "请求参数错误: ";
    pub const MISSING_PARAMETERS: &str = "缺少必要参数: student_id 和 name";
    pub const INVALID_STUDENT_ID: &str = "学号格式错误，应为12位数字";
}

// =============================================================================
// Server
// =============================================================================

/// Default HTTP listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Service description reported by the index endpoint
pub const SERVICE_MESSAGE: &str = "学生信息查询API";

/// Service version reported by the index endpoint
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Configuration
// =============================================================================

/// Environment variable overriding the data directory
pub const ENV_DATA_DIR: &str = "ADMISSION_DATA_DIR";

/// Environment variable overriding the bind address
pub const ENV_BIND_ADDRESS: &str = "ADMISSION_BIND_ADDRESS";

/// Application directory under the user's config directory
pub const CONFIG_DIR_NAME: &str = "admission-lookup";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
