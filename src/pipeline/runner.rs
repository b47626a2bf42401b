//! End-to-end report runs.

use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::formatters::{ReportFormatter, formatter_types, get_formatter};
use crate::generators::{ReportGenerator, generator_types, get_generator};
use crate::models::Report;

use super::aggregate::aggregate_records;
use super::sink::{OutputSink, write_output};

/// A report together with its rendered form.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// The generated report.
    pub report: Report,
    /// The formatter's output.
    pub content: String,
    /// MIME type of `content`.
    pub content_type: &'static str,
}

/// Looks up the generator for a report type.
///
/// # Errors
///
/// Returns [`ReportError::UnknownReportType`] listing the registered types.
pub fn resolve_generator(report_type: &str) -> ReportResult<Box<dyn ReportGenerator>> {
    get_generator(report_type).ok_or_else(|| ReportError::UnknownReportType {
        key: report_type.to_string(),
        supported: generator_types().join(", "),
    })
}

/// Looks up the formatter for a format type.
///
/// # Errors
///
/// Returns [`ReportError::UnknownFormatType`] listing the registered formats.
pub fn resolve_formatter(format_type: &str) -> ReportResult<Box<dyn ReportFormatter>> {
    get_formatter(format_type).ok_or_else(|| ReportError::UnknownFormatType {
        key: format_type.to_string(),
        supported: formatter_types().join(", "),
    })
}

/// Reads the inputs, generates the report and renders it.
///
/// Both keys are resolved before any file is read.
///
/// # Errors
///
/// - [`ReportError::UnknownReportType`] / [`ReportError::UnknownFormatType`]
///   for unregistered keys
/// - [`ReportError::NoRecords`] if the inputs produced no records
/// - [`ReportError::Serialization`] if the formatter fails
///
/// # Example
///
/// ```no_run
/// use payout_report::pipeline::render_report;
///
/// let rendered = render_report(&["data1.csv", "data2.csv"], "payout", "text")?;
/// println!("{}", rendered.content);
/// # Ok::<(), payout_report::error::ReportError>(())
/// ```
pub fn render_report<P: AsRef<Path>>(
    paths: &[P],
    report_type: &str,
    format_type: &str,
) -> ReportResult<RenderedReport> {
    let generator = resolve_generator(report_type)?;
    let formatter = resolve_formatter(format_type)?;

    let records = aggregate_records(paths)?;
    let report = generator.generate(&records);
    let content = formatter.format_report(&report)?;

    info!(
        report_type,
        format_type,
        records = records.len(),
        items = report.items().len(),
        "Report rendered"
    );

    Ok(RenderedReport {
        report,
        content,
        content_type: formatter.content_type(),
    })
}

/// Renders a report and writes it to the sink.
///
/// # Errors
///
/// Any error of [`render_report`], or [`ReportError::OutputWrite`] if the
/// sink cannot be written.
pub fn run<P: AsRef<Path>>(
    paths: &[P],
    report_type: &str,
    format_type: &str,
    sink: &OutputSink,
) -> ReportResult<RenderedReport> {
    let rendered = render_report(paths, report_type, format_type)?;
    write_output(&rendered.content, sink)?;
    Ok(rendered)
}
