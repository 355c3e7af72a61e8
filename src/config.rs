//! Configuration management and validation.
//!
//! Provides the loader and server settings of the service. Values are layered
//! from built-in defaults, an optional TOML file, environment variables and
//! finally command-line flags.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BIND_ADDRESS, DEFAULT_DATA_DIR, ENV_BIND_ADDRESS,
    ENV_DATA_DIR, PREFERRED_SHEET_NAME, SOURCE_FILE_PATTERN,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source discovery and parsing settings
    pub loader: LoaderConfig,

    /// HTTP transport settings
    pub server: ServerConfig,
}

/// Settings for loading admission workbooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory scanned for workbooks
    pub data_dir: PathBuf,

    /// File name pattern matched inside `data_dir`
    pub file_pattern: String,

    /// Sheet selected in preference to the first sheet
    pub preferred_sheet: String,

    /// Skip rows whose student ID can never pass query validation
    pub strict_student_ids: bool,

    /// Display a progress bar while loading
    pub show_progress: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_pattern: SOURCE_FILE_PATTERN.to_string(),
            preferred_sheet: PREFERRED_SHEET_NAME.to_string(),
            strict_student_ids: false,
            show_progress: false,
        }
    }
}

/// Settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind_address: SocketAddr,

    /// Attach the permissive CORS layer
    pub enable_cors: bool,

    /// Attach the request tracing layer
    pub enable_request_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            enable_cors: true,
            enable_request_logging: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    /// * Returns `Error::Io` if the file cannot be read
    /// * Returns `Error::Configuration` if the contents are not valid TOML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        Self::from_toml_str(&content).map_err(|e| {
            Error::configuration(format!("{} ({})", e, path.display()))
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid config file: {}", e)))
    }

    /// Resolve the layered configuration
    ///
    /// An explicitly supplied path must exist. Without one, the user config
    /// file is read when present and the defaults are used otherwise. The
    /// environment is applied on top of either.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|path| path.is_file()) {
                Some(path) => {
                    debug!("Using config file: {}", path.display());
                    Self::from_file(&path)?
                }
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using the given variable lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides data directory: {}", ENV_DATA_DIR, dir);
            self.loader.data_dir = PathBuf::from(dir);
        }

        if let Some(addr) = lookup(ENV_BIND_ADDRESS).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides bind address: {}", ENV_BIND_ADDRESS, addr);
            self.server.bind_address = parse_bind_address(&addr)?;
        }

        Ok(())
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.loader.data_dir = data_dir.into();
        self
    }

    /// Set the source file pattern
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.loader.file_pattern = pattern.into();
        self
    }

    /// Skip rows whose student ID can never be queried
    pub fn with_strict_student_ids(mut self) -> Self {
        self.loader.strict_student_ids = true;
        self
    }

    /// Display a progress bar while loading
    pub fn with_progress(mut self) -> Self {
        self.loader.show_progress = true;
        self
    }

    /// Set the listen address
    pub fn with_bind_address(mut self, bind_address: SocketAddr) -> Self {
        self.server.bind_address = bind_address;
        self
    }

    /// Disable the CORS layer
    pub fn without_cors(mut self) -> Self {
        self.server.enable_cors = false;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.loader.data_dir.as_os_str().is_empty() {
            return Err(Error::configuration("loader.data_dir must not be empty"));
        }

        let pattern = self.loader.file_pattern.trim();
        if pattern.is_empty() {
            return Err(Error::configuration("loader.file_pattern must not be empty"));
        }
        if pattern.contains('/') || pattern.contains('\\') {
            return Err(Error::configuration(format!(
                "loader.file_pattern must match file names only, got '{}'",
                pattern
            )));
        }
        glob::Pattern::new(pattern).map_err(|e| {
            Error::configuration(format!("loader.file_pattern is invalid: {}", e))
        })?;

        if self.loader.preferred_sheet.trim().is_empty() {
            return Err(Error::configuration(
                "loader.preferred_sheet must not be empty",
            ));
        }

        Ok(())
    }
}

/// Parse a listen address such as `0.0.0.0:8080`
pub fn parse_bind_address(value: &str) -> Result<SocketAddr> {
    value.trim().parse().map_err(|_| {
        Error::configuration(format!(
            "Invalid bind address '{}', expected host:port such as {}",
            value, DEFAULT_BIND_ADDRESS
        ))
    })
}

/// Location of the user config file, if a config directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
