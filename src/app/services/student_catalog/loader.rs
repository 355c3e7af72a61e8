//! Student catalog loading and source discovery
//!
//! This module discovers the admission workbooks in a data directory, picks the
//! student sheet of each one and feeds its rows through the row parser.

use super::StudentCatalog;
use super::metadata::LoadStats;
use super::parser::{RowOutcome, parse_student_row, parse_student_row_strict};
use crate::app::models::Student;
use crate::app::services::lookup::validation::is_valid_student_id;
use crate::config::LoaderConfig;
use crate::constants::{PREFERRED_SHEET_NAME, SOURCE_FILE_PATTERN};
use crate::{Error, Result};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Options controlling how source workbooks are read
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// File name pattern matched directly inside the data directory
    pub file_pattern: String,

    /// Sheet selected in preference to the first sheet
    pub preferred_sheet: String,

    /// Skip rows whose student ID can never pass query validation
    pub strict_student_ids: bool,

    /// Whether to display a progress bar
    pub show_progress: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            file_pattern: SOURCE_FILE_PATTERN.to_string(),
            preferred_sheet: PREFERRED_SHEET_NAME.to_string(),
            strict_student_ids: false,
            show_progress: false,
        }
    }
}

impl From<&LoaderConfig> for LoaderOptions {
    fn from(config: &LoaderConfig) -> Self {
        Self {
            file_pattern: config.file_pattern.clone(),
            preferred_sheet: config.preferred_sheet.clone(),
            strict_student_ids: config.strict_student_ids,
            show_progress: config.show_progress,
        }
    }
}

/// Rows read from the selected sheet of one workbook
#[derive(Debug, Clone)]
pub struct SheetRows {
    /// Name of the sheet that was read
    pub sheet_name: String,

    /// Rows as positional string fields, trailing empty cells dropped
    pub rows: Vec<Vec<String>>,
}

impl StudentCatalog {
    /// Load the catalog from every matching workbook in a directory
    ///
    /// Files are processed sequentially in discovery order. A file that cannot
    /// be opened or read is skipped and recorded in the statistics; loading
    /// continues with the next file.
    ///
    /// # Arguments
    /// * `data_dir` - Directory containing the admission workbooks
    /// * `options` - Discovery and parsing options
    ///
    /// # Returns
    /// * `Result<(StudentCatalog, LoadStats)>` - Catalog and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::NoSourceFiles` if no file matches the pattern
    /// * Returns `Error::DirectoryScan` if the directory cannot be scanned
    pub fn load_from_directory(
        data_dir: &Path,
        options: &LoaderOptions,
    ) -> Result<(Self, LoadStats)> {
        info!(
            "Loading student catalog from {} (pattern '{}')",
            data_dir.display(),
            options.file_pattern
        );

        let start_time = Instant::now();
        let mut stats = LoadStats::new();

        let files = Self::discover_source_files(data_dir, &options.file_pattern)?;
        stats.files_discovered = files.len();
        info!("Found {} source files to process", files.len());

        let progress_bar = if options.show_progress {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .map(|style| style.progress_chars("#>-"))
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb.set_message("Loading admission workbooks...");
            Some(pb)
        } else {
            None
        };

        let mut students = Vec::new();
        let mut loaded_files = Vec::new();

        for (file_index, file_path) in files.iter().enumerate() {
            if let Some(pb) = &progress_bar {
                pb.set_position(file_index as u64);
                pb.set_message(format!(
                    "Reading {}",
                    file_path.file_name().unwrap_or_default().to_string_lossy()
                ));
            }

            match Self::read_workbook(file_path, &options.preferred_sheet) {
                Ok(sheet) => {
                    let before = students.len();
                    Self::collect_rows(&sheet, options, &mut students, &mut stats);
                    let added = students.len() - before;

                    info!(
                        "Loaded {} records from {} (sheet '{}')",
                        added,
                        file_path.display(),
                        sheet.sheet_name
                    );
                    stats.files_loaded += 1;
                    loaded_files.push(file_path.clone());
                }
                Err(e) => {
                    warn!("Skipping {}: {}", file_path.display(), e);
                    stats.files_failed += 1;
                    stats.errors.push(format!("{}: {}", file_path.display(), e));
                }
            }

            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message("Student catalog loading complete");
        }

        stats.records_loaded = students.len();
        stats.load_duration = start_time.elapsed();

        let mut catalog = Self::build(data_dir.to_path_buf(), students, loaded_files);
        catalog.load_time = start_time;

        info!(
            "Student catalog loaded: {} records from {} files in {:.2}s",
            stats.records_loaded,
            stats.files_loaded,
            stats.load_duration.as_secs_f64()
        );
        if stats.unreachable_ids > 0 {
            warn!(
                "{} records have a student ID that is not 12 digits and can never be matched",
                stats.unreachable_ids
            );
        }

        Ok((catalog, stats))
    }

    /// Discover source files directly inside the data directory
    ///
    /// Matching is flat (no recursion). The directory part is escaped so that
    /// glob metacharacters in the path are taken literally. Results are returned
    /// in lexical order.
    pub fn discover_source_files(data_dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>> {
        let dir = data_dir.to_str().ok_or_else(|| {
            Error::directory_scan(
                format!("Data directory is not valid UTF-8: {}", data_dir.display()),
                "non UTF-8 path",
            )
        })?;

        if !data_dir.is_dir() {
            warn!("Data directory does not exist: {}", data_dir.display());
        }

        let pattern = Path::new(&glob::Pattern::escape(dir)).join(file_pattern);
        let pattern = pattern.to_string_lossy();
        debug!("Scanning for source files: {}", pattern);

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(Error::no_source_files(
                data_dir.display().to_string(),
                file_pattern,
            ));
        }

        debug!("Discovered {} source files", files.len());
        Ok(files)
    }

    /// Read the selected sheet of one workbook
    ///
    /// # Errors
    /// * Returns `Error::Workbook` if the file cannot be opened or the sheet cannot be read
    /// * Returns `Error::EmptyWorkbook` if the workbook has no sheets
    pub fn read_workbook(file_path: &Path, preferred_sheet: &str) -> Result<SheetRows> {
        debug!("Opening workbook: {}", file_path.display());
        let file_name = file_path.display().to_string();

        let mut workbook: Xlsx<_> = open_workbook(file_path).map_err(|e| {
            Error::workbook(file_name.clone(), "Failed to open workbook", Some(e))
        })?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = select_sheet_named(&sheet_names, preferred_sheet)
            .ok_or_else(|| Error::empty_workbook(file_name.clone()))?
            .to_string();
        debug!("Selected sheet '{}' of {}", sheet_name, file_path.display());

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            Error::workbook(
                file_name.clone(),
                format!("Failed to read sheet '{}'", sheet_name),
                Some(e),
            )
        })?;

        Ok(SheetRows {
            sheet_name,
            rows: range_to_rows(&range),
        })
    }

    fn collect_rows(
        sheet: &SheetRows,
        options: &LoaderOptions,
        students: &mut Vec<Student>,
        stats: &mut LoadStats,
    ) {
        for (index, row) in sheet.rows.iter().enumerate() {
            if index > 0 {
                stats.rows_seen += 1;
            }

            let outcome = if options.strict_student_ids {
                parse_student_row_strict(row, index)
            } else {
                parse_student_row(row, index)
            };

            match outcome {
                RowOutcome::Admitted(student) => {
                    if !is_valid_student_id(&student.student_id) {
                        stats.unreachable_ids += 1;
                        warn!(
                            "Row {} of sheet '{}' admitted with malformed student ID '{}'",
                            index + 1,
                            sheet.sheet_name,
                            student.student_id
                        );
                    }
                    students.push(student);
                }
                RowOutcome::Skipped(reason) => stats.record_skip(&reason),
            }
        }
    }
}

/// Select the sheet to read from a workbook's sheet list
///
/// The sheet named `学生信息` wins wherever it appears; otherwise the first
/// sheet is used. Returns `None` for an empty list.
pub fn select_sheet(sheet_names: &[String]) -> Option<&str> {
    select_sheet_named(sheet_names, PREFERRED_SHEET_NAME)
}

/// Select `preferred` if present, otherwise the first sheet
pub fn select_sheet_named<'a>(sheet_names: &'a [String], preferred: &str) -> Option<&'a str> {
    sheet_names
        .iter()
        .find(|name| name.as_str() == preferred)
        .or_else(|| sheet_names.first())
        .map(String::as_str)
}

/// Convert a cell to its string form
///
/// Integral numbers are written without a fractional part so that numeric
/// student IDs survive (`202501010001.0` becomes `202501010001`).
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Convert one worksheet row to positional fields, dropping trailing empty cells
pub fn row_to_fields(row: &[Data]) -> Vec<String> {
    let mut fields: Vec<String> = row.iter().map(cell_to_string).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Convert a worksheet range to rows anchored at cell A1
///
/// A range starts at its first used cell, so leading empty rows and columns
/// are restored to keep row indices and column positions absolute.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut fields = row_to_fields(row);
        if !fields.is_empty() && start_col > 0 {
            let mut padded = vec![String::new(); start_col as usize];
            padded.append(&mut fields);
            fields = padded;
        }
        rows.push(fields);
    }
    rows
}
