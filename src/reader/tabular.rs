//! Comma-separated table reading.
//!
//! The first line of a file names the columns. Every later non-blank line
//! becomes a [`Record`] when it has exactly as many fields as the header.
//! Fields are split on the delimiter only; quote characters are ordinary
//! text. Whitespace around a whole line is ignored, whitespace around an
//! inner field is kept.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{ReportError, ReportResult};
use crate::models::Record;

/// Field separator for input files.
pub const DELIMITER: u8 = b',';

/// A data line that was dropped because its field count did not match the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the file (the header is line 1).
    pub line_number: usize,
    /// Field count of the header.
    pub expected: usize,
    /// Field count of the rejected line.
    pub found: usize,
    /// The trimmed line content.
    pub content: String,
}

/// Everything read from one file that could be opened.
#[derive(Debug, Clone, Default)]
pub struct TableRead {
    /// Column names from the header line.
    pub header: Vec<String>,
    /// Accepted rows in file order.
    pub records: Vec<Record>,
    /// Rows dropped for a field-count mismatch, in file order.
    pub rejected: Vec<RejectedRow>,
}

/// Reads a table, reporting file-scoped failures as errors.
///
/// Malformed rows do not fail the read; they are logged and collected in
/// [`TableRead::rejected`].
///
/// # Errors
///
/// - [`ReportError::FileNotFound`] if the path does not exist
/// - [`ReportError::ReadFailed`] if the file cannot be read as UTF-8 text
/// - [`ReportError::EmptyFile`] if the file has no lines at all
///
/// # Example
///
/// ```no_run
/// use payout_report::reader::read_table;
///
/// let table = read_table("employees.csv")?;
/// println!("{} rows, {} rejected", table.records.len(), table.rejected.len());
/// # Ok::<(), payout_report::error::ReportError>(())
/// ```
pub fn read_table<P: AsRef<Path>>(path: P) -> ReportResult<TableRead> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(ReportError::FileNotFound { path: path_str });
    }

    let content = fs::read_to_string(path).map_err(|e| ReportError::ReadFailed {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    if content.is_empty() {
        return Err(ReportError::EmptyFile { path: path_str });
    }

    let read_failed = |e: csv::Error| ReportError::ReadFailed {
        path: path_str.clone(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(DELIMITER)
        .from_reader(content.as_bytes());
    let mut rows = reader.records().peekable();

    // Empty lines yield no row, so a blank first line leaves a single empty column
    let header: Vec<String> =
        match rows.next_if(|row| matches!(row, Ok(first) if row_line(first) == 1)) {
            Some(Ok(first)) => trimmed_fields(&first).into_iter().map(str::to_string).collect(),
            _ => vec![String::new()],
        };
    let columns: Vec<&str> = header.iter().map(String::as_str).collect();
    let mut records = Vec::new();
    let mut rejected = Vec::new();

    for row in rows {
        let row = row.map_err(read_failed)?;
        let values = trimmed_fields(&row);
        if values.len() == 1 && values[0].is_empty() {
            continue;
        }

        let line_number = row_line(&row);
        if values.len() == columns.len() {
            records.push(Record::from_row(&columns, &values));
        } else {
            let line = values.join(",");
            warn!(
                path = %path_str,
                line = line_number,
                expected = columns.len(),
                found = values.len(),
                "Skipping malformed row: {}",
                line
            );
            rejected.push(RejectedRow {
                line_number,
                expected: columns.len(),
                found: values.len(),
                content: line,
            });
        }
    }

    let table = TableRead {
        header,
        records,
        rejected,
    };

    debug!(
        path = %path_str,
        records = table.records.len(),
        rejected = table.rejected.len(),
        "Read input file"
    );

    Ok(table)
}

fn row_line(row: &StringRecord) -> usize {
    row.position().map_or(0, |position| position.line() as usize)
}

/// Fields of a row with the whitespace around the whole line removed.
fn trimmed_fields(row: &StringRecord) -> Vec<&str> {
    let last = row.len().saturating_sub(1);
    row.iter()
        .enumerate()
        .map(|(index, field)| {
            let field = if index == 0 { field.trim_start() } else { field };
            if index == last { field.trim_end() } else { field }
        })
        .collect()
}

/// Reads the records of a table, never failing.
///
/// A missing, empty or unreadable file yields an empty vector after a
/// warning; use [`read_table`] to tell those cases apart from a file that
/// simply has no data rows.
pub fn read<P: AsRef<Path>>(path: P) -> Vec<Record> {
    match read_table(path) {
        Ok(table) => table.records,
        Err(err) => {
            warn!(error = %err, "Input file yielded no records");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_reads_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.csv",
            b"name,department,hours_worked,hourly_rate\nAlice Johnson,Marketing,160,50\nBob Smith,Design,150,40\n",
        );

        let records = read(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some("Alice Johnson"));
        assert_eq!(records[0].get("hourly_rate"), Some("50"));
        assert_eq!(records[1].get("department"), Some("Design"));
    }

    #[test]
    fn test_short_row_is_rejected_and_rest_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"a,b,c\n1,2,3\n4,5\n6,7,8\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[1].get("c"), Some("8"));
        assert_eq!(
            table.rejected,
            vec![RejectedRow {
                line_number: 3,
                expected: 3,
                found: 2,
                content: "4,5".to_string(),
            }]
        );
    }

    #[test]
    fn test_long_row_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"a,b\n1,2,3\n");

        let table = read_table(&path).unwrap();
        assert!(table.records.is_empty());
        assert_eq!(table.rejected[0].found, 3);
    }

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"a,b\n\n   \n1,2\nbad\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.rejected.len(), 1);
        assert_eq!(table.rejected[0].line_number, 5);
    }

    #[test]
    fn test_crlf_line_endings_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"name,rate\r\nAlice,50\r\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.header, vec!["name", "rate"]);
        assert_eq!(table.records[0].get("rate"), Some("50"));
    }

    #[test]
    fn test_values_are_not_trimmed_individually() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"name,department\nAlice, Marketing\n");

        let records = read(&path);
        assert_eq!(records[0].get("department"), Some(" Marketing"));
    }

    #[test]
    fn test_quotes_are_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"name,department\n\"Smith, J\",Sales\n\"Lee\",Ops\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.rejected[0].line_number, 2);
        assert_eq!(table.rejected[0].content, "\"Smith, J\",Sales");
        assert_eq!(table.records[0].get("name"), Some("\"Lee\""));
    }

    #[test]
    fn test_whole_line_whitespace_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"  name,rate \n\tAlice , 50  \n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.header, vec!["name", "rate"]);
        assert_eq!(table.records[0].get("name"), Some("Alice "));
        assert_eq!(table.records[0].get("rate"), Some(" 50"));
    }

    #[test]
    fn test_blank_first_line_gives_single_empty_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"\nname,rate\nsolo\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.header, vec![""]);
        assert_eq!(table.rejected[0].line_number, 2);
        assert_eq!(table.records[0].get(""), Some("solo"));
    }

    #[test]
    fn test_header_only_file_is_valid_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.csv", b"name,department\n");

        let table = read_table(&path).unwrap();
        assert!(table.records.is_empty());
        assert!(table.rejected.is_empty());
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        match read_table(&path) {
            Err(ReportError::FileNotFound { path: p }) => assert!(p.ends_with("absent.csv")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
        assert!(read(&path).is_empty());
    }

    #[test]
    fn test_empty_file_returns_empty_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.csv", b"");

        assert!(matches!(read_table(&path), Err(ReportError::EmptyFile { .. })));
        assert!(read(&path).is_empty());
    }

    #[test]
    fn test_invalid_utf8_returns_read_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "binary.csv", &[0x6e, 0x61, 0x0a, 0xff, 0xfe, 0x0a]);

        assert!(matches!(read_table(&path), Err(ReportError::ReadFailed { .. })));
        assert!(read(&path).is_empty());
    }

    #[test]
    fn test_non_ascii_values_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.csv",
            "name,department\nИван Петров,Бухгалтерия\n".as_bytes(),
        );

        let records = read(&path);
        assert_eq!(records[0].get("name"), Some("Иван Петров"));
        assert_eq!(records[0].get("department"), Some("Бухгалтерия"));
    }
}
