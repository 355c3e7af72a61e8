//! Admission Lookup Library
//!
//! A Rust library for loading incoming-student admission spreadsheets into an
//! in-memory catalog and answering identity lookups against it.
//!
//! This library provides tools for:
//! - Discovering `.xlsx` source files and selecting the student sheet of each workbook
//! - Parsing positional rows into validated student records
//! - Holding the loaded records as an immutable, ordered catalog
//! - Verifying (student ID, name) pairs and disclosing only the admitted major
//! - Serving lookups over a small JSON HTTP API

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod lookup;
        pub mod student_catalog;
    }
    pub mod adapters {
        pub mod http;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Student, StudentQuery};
pub use app::services::lookup::{LookupResponse, LookupService, ResponseCode};
pub use app::services::student_catalog::{LoadStats, LoaderOptions, StudentCatalog};
pub use config::Config;

/// Result type alias for the admission lookup service
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog loading, configuration and serving
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("Workbook error in file '{file}': {message}")]
    Workbook {
        file: String,
        message: String,
        #[source]
        source: Option<calamine::XlsxError>,
    },

    /// Workbook opened but contains no sheets
    #[error("Workbook '{file}' contains no sheets")]
    EmptyWorkbook { file: String },

    /// No source files matched the discovery pattern
    #[error("No source files found matching '{pattern}' in {directory}")]
    NoSourceFiles { directory: String, pattern: String },

    /// Scanning the source directory failed
    #[error("Directory scan failed: {message}")]
    DirectoryScan {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// HTTP server failed to start or terminated abnormally
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook error with context
    pub fn workbook(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<calamine::XlsxError>,
    ) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty workbook error
    pub fn empty_workbook(file: impl Into<String>) -> Self {
        Self::EmptyWorkbook { file: file.into() }
    }

    /// Create a no source files error
    pub fn no_source_files(directory: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::NoSourceFiles {
            directory: directory.into(),
            pattern: pattern.into(),
        }
    }

    /// Create a directory scan error
    pub fn directory_scan(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::DirectoryScan {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Server {
            message: message.into(),
            source,
        }
    }

    /// Whether the error must stop startup rather than skip a single file
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            Error::NoSourceFiles { .. }
                | Error::DirectoryScan { .. }
                | Error::Configuration { .. }
                | Error::Server { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::DirectoryScan {
            message: "Invalid file pattern".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<glob::GlobError> for Error {
    fn from(error: glob::GlobError) -> Self {
        Self::DirectoryScan {
            message: "Failed to read directory entry".to_string(),
            source: Box::new(error),
        }
    }
}
