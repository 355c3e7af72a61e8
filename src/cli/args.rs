//! Command-line argument definitions for the admission lookup service
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{Config, parse_bind_address};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the admission lookup service
///
/// Loads incoming-student admission workbooks and verifies student ID and
/// name pairs against them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "admission-lookup",
    version,
    about = "Verify incoming students against admission spreadsheets",
    long_about = "Loads every admission workbook in a data directory into memory and answers \
                  lookups that verify a (student ID, name) pair, disclosing only the admitted \
                  major. Runs as a small JSON HTTP API or as one-off commands."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load the catalog and serve the lookup API
    Serve(ServeArgs),
    /// Load the catalog and print a report about it
    Inspect(InspectArgs),
    /// Load the catalog and answer a single lookup
    Query(QueryArgs),
}

/// Options shared by every command that loads the catalog
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LoadArgs {
    /// Configuration file (TOML)
    ///
    /// If not specified, ~/.config/admission-lookup/config.toml is used when present.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Directory containing the admission workbooks
    #[arg(short = 'd', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// File name pattern matched inside the data directory
    #[arg(long = "pattern", value_name = "GLOB")]
    pub file_pattern: Option<String>,

    /// Skip rows whose student ID is not 12 digits
    #[arg(long = "strict-ids")]
    pub strict_student_ids: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the serve command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ServeArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Listen address (host:port)
    #[arg(short = 'b', long = "bind", value_name = "ADDR")]
    pub bind_address: Option<String>,

    /// Disable the CORS layer
    #[arg(long = "no-cors")]
    pub no_cors: bool,

    /// Disable per-request trace logging
    #[arg(long = "no-request-log")]
    pub no_request_log: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, ClapArgs)]
pub struct InspectArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Report format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Include per-college counts and duplicate identities
    #[arg(long = "detailed")]
    pub detailed: bool,
}

/// Arguments for the query command
#[derive(Debug, Clone, ClapArgs)]
pub struct QueryArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Student ID to verify
    #[arg(long = "student-id", value_name = "ID")]
    pub student_id: String,

    /// Name to verify
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl LoadArgs {
    /// Validate the arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config_path {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
        }

        if let Some(pattern) = &self.file_pattern {
            if pattern.trim().is_empty() {
                return Err(Error::configuration("--pattern must not be empty"));
            }
        }

        Ok(())
    }

    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether to draw a progress bar while loading
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.verbose == 0
    }

    /// Apply the loader flags on top of a resolved configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir.clone());
        }
        if let Some(pattern) = &self.file_pattern {
            config = config.with_file_pattern(pattern.trim());
        }
        if self.strict_student_ids {
            config = config.with_strict_student_ids();
        }
        config
    }
}

impl ServeArgs {
    /// Validate the arguments
    pub fn validate(&self) -> Result<()> {
        self.load.validate()?;
        if let Some(addr) = &self.bind_address {
            parse_bind_address(addr)?;
        }
        Ok(())
    }

    /// Get log level based on verbosity
    ///
    /// The server reports its load summary and listen address at info, so
    /// info is the floor unless `--quiet` is given.
    pub fn get_log_level(&self) -> &'static str {
        if self.load.quiet {
            return "error";
        }
        match self.load.verbose {
            0 | 1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Apply the server flags on top of a configuration already carrying the loader flags
    pub fn apply_to(&self, mut config: Config) -> Result<Config> {
        // Per-file load lines replace the progress bar
        config.loader.show_progress = false;
        if let Some(addr) = &self.bind_address {
            config = config.with_bind_address(parse_bind_address(addr)?);
        }
        if self.no_cors {
            config = config.without_cors();
        }
        if self.no_request_log {
            config.server.enable_request_logging = false;
        }
        Ok(config)
    }
}

impl QueryArgs {
    /// Validate the arguments
    pub fn validate(&self) -> Result<()> {
        self.load.validate()
    }
}

impl InspectArgs {
    /// Validate the arguments
    pub fn validate(&self) -> Result<()> {
        self.load.validate()
    }
}
