//! Tabular input reading.
//!
//! This module turns delimited text files into [`Record`](crate::models::Record)s.
//! [`read`] is the forgiving entry point used by the pipeline; [`read_table`]
//! exposes the same parse with file-scoped failures as errors.

mod tabular;

pub use tabular::{DELIMITER, RejectedRow, TableRead, read, read_table};
