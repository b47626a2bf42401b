//! The report pipeline: read → aggregate → generate → format → write.
//!
//! Row- and file-level problems are logged and recovered inside the
//! pipeline. Unknown report/format keys, an empty aggregate and output
//! failures are returned as errors.
//!
//! # Example
//!
//! ```no_run
//! use payout_report::pipeline::{OutputSink, run};
//!
//! run(&["employees.csv"], "payout", "text", &OutputSink::Console)?;
//! # Ok::<(), payout_report::error::ReportError>(())
//! ```

mod aggregate;
mod runner;
mod sink;

pub use aggregate::{INPUT_EXTENSION, aggregate_records, validate_input_paths};
pub use runner::{RenderedReport, render_report, resolve_formatter, resolve_generator, run};
pub use sink::{OutputSink, write_output};
