//! Input path validation and record aggregation.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ReportError, ReportResult};
use crate::models::Record;
use crate::reader::read_table;

/// Extension accepted for input files (compared case-insensitively).
pub const INPUT_EXTENSION: &str = "csv";

/// Keeps the paths that exist and carry a `.csv` extension.
///
/// Every dropped path is logged with the reason.
pub fn validate_input_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut valid = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "Input file does not exist, skipping");
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));
        if !is_csv {
            warn!(path = %path.display(), "Input file is not a CSV file, skipping");
            continue;
        }

        valid.push(path.to_path_buf());
    }

    valid
}

/// Reads every file and concatenates the records, preserving file and row order.
///
/// Files that cannot be read are logged and contribute nothing.
///
/// # Errors
///
/// Returns [`ReportError::NoRecords`] when no file produced a record.
pub fn aggregate_records<P: AsRef<Path>>(paths: &[P]) -> ReportResult<Vec<Record>> {
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        match read_table(path) {
            Ok(table) => {
                info!(
                    path = %path.display(),
                    records = table.records.len(),
                    rejected = table.rejected.len(),
                    "Loaded input file"
                );
                records.extend(table.records);
            }
            Err(err) => warn!(path = %path.display(), error = %err, "Failed to read input file"),
        }
    }

    if records.is_empty() {
        return Err(ReportError::NoRecords { files: paths.len() });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_aggregates_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        fs::write(&first, "name,rate\nAlice,1\nBob,2\n").unwrap();
        fs::write(&second, "rate,name\n3,Carol\n").unwrap();

        let records = aggregate_records(&[&first, &second]).unwrap();
        let names: Vec<&str> = records.iter().filter_map(|r| r.get("name")).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_failed_file_does_not_stop_others() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        let empty = dir.path().join("empty.csv");
        let good = dir.path().join("good.csv");
        fs::write(&empty, "").unwrap();
        fs::write(&good, "name\nDana\n").unwrap();

        let records = aggregate_records(&[&missing, &empty, &good]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("name"), Some("Dana"));
    }

    #[test]
    fn test_no_records_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let header_only = dir.path().join("header.csv");
        fs::write(&header_only, "name,rate\n").unwrap();
        let missing = dir.path().join("missing.csv");

        match aggregate_records(&[&header_only, &missing]) {
            Err(ReportError::NoRecords { files }) => assert_eq!(files, 2),
            other => panic!("Expected NoRecords error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_input_paths_filters_missing_and_non_csv() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("data.csv");
        let upper = dir.path().join("DATA2.CSV");
        let txt = dir.path().join("notes.txt");
        fs::write(&csv, "a\n").unwrap();
        fs::write(&upper, "a\n").unwrap();
        fs::write(&txt, "a\n").unwrap();
        let missing = dir.path().join("missing.csv");

        let valid = validate_input_paths(&[&csv, &txt, &missing, &upper]);
        assert_eq!(valid, vec![csv, upper]);
    }
}
