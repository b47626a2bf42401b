//! Error types for the payout report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the report pipeline can observe. Row- and file-scoped
//! variants are consumed inside the component that produces them; the
//! remaining variants are fatal for a run and reach the caller.

use thiserror::Error;

/// The main error type for the payout report engine.
///
/// # Example
///
/// ```
/// use payout_report::error::ReportError;
///
/// let error = ReportError::FileNotFound {
///     path: "/missing/employees.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: /missing/employees.csv");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// An input file did not exist when the reader reached it.
    #[error("Input file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// An input file existed but contained no lines at all.
    #[error("Input file is empty: {path}")]
    EmptyFile {
        /// The path of the empty file.
        path: String,
    },

    /// An input file could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read input file '{path}': {message}")]
    ReadFailed {
        /// The path of the unreadable file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// A numeric field of a record could not be parsed.
    #[error("Invalid value for '{field}' of employee '{employee}': {message}")]
    InvalidNumber {
        /// The employee the record belongs to.
        employee: String,
        /// The column holding the bad value.
        field: String,
        /// A description of the parse failure.
        message: String,
    },

    /// None of the input files produced a single record.
    #[error("No records could be read from {files} input file(s)")]
    NoRecords {
        /// How many files were attempted.
        files: usize,
    },

    /// No input path survived validation.
    #[error("No valid CSV input files were given")]
    NoValidFiles,

    /// The requested report type is not registered.
    #[error("Unsupported report type '{key}'. Supported types: {supported}")]
    UnknownReportType {
        /// The requested key.
        key: String,
        /// Comma-separated list of registered keys.
        supported: String,
    },

    /// The requested output format is not registered.
    #[error("Unsupported output format '{key}'. Supported formats: {supported}")]
    UnknownFormatType {
        /// The requested key.
        key: String,
        /// Comma-separated list of registered keys.
        supported: String,
    },

    /// The output file exists and overwriting was not allowed.
    #[error("Output file already exists: {path}")]
    OutputExists {
        /// The path of the existing file.
        path: String,
    },

    /// The report could not be written to its destination.
    #[error("Failed to write report to '{path}': {message}")]
    OutputWrite {
        /// The destination path.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The HTTP server could not start or stopped with an error.
    #[error("Server error on {address}: {message}")]
    Server {
        /// The address the server was bound to.
        address: String,
        /// A description of the failure.
        message: String,
    },

    /// A report could not be converted to or from its structured form.
    #[error("Serialization error: {message}")]
    Serialization {
        /// A description of the serialization failure.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::Serialization {
            message: error.to_string(),
        }
    }
}
