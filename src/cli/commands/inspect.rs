//! Inspect command implementation
//!
//! Loads the catalog and prints what was loaded, what was skipped and which
//! records can never be matched.

use super::shared::{load_catalog, resolve_config, setup_logging};
use crate::app::services::lookup::is_valid_student_id;
use crate::app::services::student_catalog::{LoadStats, StudentCatalog};
use crate::cli::args::{InspectArgs, OutputFormat};
use anyhow::Context;
use colored::*;
use serde_json::json;

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> anyhow::Result<LoadStats> {
    setup_logging(args.load.get_log_level())?;
    args.validate()?;

    let config = resolve_config(&args.load)?;
    let (catalog, stats) = load_catalog(&config).await?;

    let report = match args.output_format {
        OutputFormat::Human => human_report(&catalog, &stats, args.detailed),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&json_report(&catalog, &stats, args.detailed))
                .context("Failed to encode report")?
        }
    };
    println!("{}", report);

    Ok(stats)
}

/// Build the human-readable report
pub fn human_report(catalog: &StudentCatalog, stats: &LoadStats, detailed: bool) -> String {
    let metadata = catalog.metadata();

    let mut output = format!(
        "{}\n\
         Data Directory: {}\n\
         Source Files: {} loaded, {} failed, {} discovered\n\
         Records: {}\n\
         Rows Skipped: {} ({} incomplete, {} missing ID or name, {} malformed ID)\n\
         Unreachable IDs: {}\n\
         Loaded At: {}\n\
         Load Time: {:.2}s\n",
        "Admission Catalog Report".bright_green().bold(),
        metadata.source_dir.display(),
        stats.files_loaded,
        stats.files_failed,
        stats.files_discovered,
        metadata.record_count.to_string().bright_white().bold(),
        stats.skip_count(),
        stats.rows_incomplete,
        stats.rows_missing_identity,
        stats.rows_invalid_id,
        stats.unreachable_ids,
        metadata.loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
        stats.load_duration.as_secs_f64()
    );

    if stats.has_errors() {
        output.push_str(&format!("\n{}\n", "Load Errors".bright_red().bold()));
        for error in &stats.errors {
            output.push_str(&format!("  {}\n", error));
        }
    }

    if detailed {
        output.push_str(&format!("\n{}\n", "Records by College".bright_green().bold()));
        for (college, count) in catalog.count_by_college() {
            let college = if college.is_empty() { "(blank)" } else { college };
            output.push_str(&format!("  {:<24} {}\n", college, count));
        }

        let duplicates = catalog.duplicate_identities();
        if !duplicates.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "Duplicate Identities (first occurrence wins)".yellow().bold()
            ));
            for (student_id, name, count) in duplicates {
                output.push_str(&format!("  {} {} x{}\n", student_id, name, count));
            }
        }

        let unreachable: Vec<_> = catalog
            .records()
            .filter(|student| !is_valid_student_id(&student.student_id))
            .collect();
        if !unreachable.is_empty() {
            output.push_str(&format!("\n{}\n", "Unreachable Records".yellow().bold()));
            for student in unreachable {
                output.push_str(&format!("  '{}' {}\n", student.student_id, student.name));
            }
        }
    }

    output
}

/// Build the machine-readable report
pub fn json_report(
    catalog: &StudentCatalog,
    stats: &LoadStats,
    detailed: bool,
) -> serde_json::Value {
    let metadata = catalog.metadata();

    let mut report = json!({
        "source_dir": metadata.source_dir.display().to_string(),
        "source_files": metadata
            .source_files
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>(),
        "record_count": metadata.record_count,
        "loaded_at": metadata.loaded_at.to_rfc3339(),
        "load_duration_secs": stats.load_duration.as_secs_f64(),
        "files": {
            "discovered": stats.files_discovered,
            "loaded": stats.files_loaded,
            "failed": stats.files_failed,
        },
        "rows": {
            "seen": stats.rows_seen,
            "incomplete": stats.rows_incomplete,
            "missing_identity": stats.rows_missing_identity,
            "invalid_id": stats.rows_invalid_id,
        },
        "unreachable_ids": stats.unreachable_ids,
        "errors": stats.errors,
    });

    if detailed {
        report["colleges"] = json!(catalog.count_by_college());
        report["duplicates"] = catalog
            .duplicate_identities()
            .into_iter()
            .map(|(student_id, name, count)| {
                json!({"student_id": student_id, "name": name, "count": count})
            })
            .collect();
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Student;
    use std::path::PathBuf;

    fn create_test_catalog() -> (StudentCatalog, LoadStats) {
        let students = vec![
            Student::new("2025", "计算机学院", "计科2501", "202501010001", "张三", "计算机科学与技术")
                .unwrap(),
            Student::new("2025", "计算机学院", "计科2501", "202501010001", "张三", "软件工程")
                .unwrap(),
            Student::new("2025", "外国语学院", "英语2502", "12345", "钱七", "英语").unwrap(),
        ];
        let catalog = StudentCatalog::build(
            PathBuf::from("/srv/intake"),
            students,
            vec![PathBuf::from("/srv/intake/2025.xlsx")],
        );

        let mut stats = LoadStats::new();
        stats.files_discovered = 2;
        stats.files_loaded = 1;
        stats.files_failed = 1;
        stats.rows_seen = 5;
        stats.records_loaded = 3;
        stats.rows_incomplete = 2;
        stats.unreachable_ids = 1;
        stats.errors.push("/srv/intake/broken.xlsx: open failed".to_string());
        (catalog, stats)
    }

    #[test]
    fn test_human_report() {
        colored::control::set_override(false);
        let (catalog, stats) = create_test_catalog();

        let report = human_report(&catalog, &stats, false);
        assert!(report.contains("Admission Catalog Report"));
        assert!(report.contains("Records: 3"));
        assert!(report.contains("1 loaded, 1 failed, 2 discovered"));
        assert!(report.contains("broken.xlsx"));
        assert!(!report.contains("Records by College"));

        let detailed = human_report(&catalog, &stats, true);
        assert!(detailed.contains("Records by College"));
        assert!(detailed.contains("202501010001 张三 x2"));
        assert!(detailed.contains("'12345' 钱七"));
    }

    #[test]
    fn test_json_report() {
        let (catalog, stats) = create_test_catalog();

        let report = json_report(&catalog, &stats, false);
        assert_eq!(report["record_count"], 3);
        assert_eq!(report["files"]["failed"], 1);
        assert_eq!(report["rows"]["incomplete"], 2);
        assert_eq!(report["unreachable_ids"], 1);
        assert!(report.get("colleges").is_none());

        let detailed = json_report(&catalog, &stats, true);
        assert_eq!(detailed["colleges"]["计算机学院"], 2);
        assert_eq!(detailed["duplicates"][0]["count"], 2);
    }
}
