//! JSON report output.
//!
//! Defines the versioned report written next to the SVG and the reader the
//! `validate` command uses. Schema is versioned to allow future evolution.

use crate::github::SkippedRepo;
use crate::metrics::ContributionMetrics;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// User the metrics belong to
    pub username: String,

    /// Trailing window length in days
    pub window_days: i64,

    /// Aggregated contribution counts and impact score
    pub metrics: ContributionMetrics,

    /// Repositories the fetch had to skip
    pub skipped_repos: Vec<SkippedRepo>,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(
    report: &ContributionReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    if output_path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!("Report written successfully");
    Ok(())
}

/// Read a report back from a JSON file
///
/// **Public** - used by the validate command and tests
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ContributionReport, OutputError> {
    let file = File::open(input_path.as_ref()).map_err(OutputError::WriteFailed)?;
    let reader = BufReader::new(file);
    let report = serde_json::from_reader(reader).map_err(OutputError::SerializationFailed)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::SCHEMA_VERSION;
    use tempfile::NamedTempFile;

    fn sample_report() -> ContributionReport {
        ContributionReport {
            version: SCHEMA_VERSION.to_string(),
            username: "octocat".to_string(),
            window_days: 365,
            metrics: ContributionMetrics {
                prs_merged: 2,
                prs_opened: 1,
                reviews: 2,
                issues_opened: 1,
                issues_closed: 1,
                distinct_repos: 1,
                impact_score: 18,
            },
            skipped_repos: vec![],
            generated_at: "2026-08-23T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let temp_file = NamedTempFile::new().unwrap();
        let report = sample_report();

        write_report(&report, temp_file.path()).unwrap();
        let read_back = read_report(temp_file.path()).unwrap();

        assert_eq!(read_back.version, SCHEMA_VERSION);
        assert_eq!(read_back.username, "octocat");
        assert_eq!(read_back.metrics, report.metrics);
    }

    #[test]
    fn test_read_report_rejects_garbage() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "not json").unwrap();
        assert!(read_report(temp_file.path()).is_err());
    }
}
