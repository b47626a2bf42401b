//! The [`ReportFormatter`] trait and the process-wide formatter registry.

use std::sync::OnceLock;

use serde_json::Value;

use crate::error::ReportResult;
use crate::models::Report;
use crate::registry::{Factory, Registry};

use super::json::{JSON_FORMAT, JsonFormatter};
use super::text::{TEXT_FORMAT, TextFormatter};

/// Renders a structured report document into its final string form.
///
/// Formatters take the report as a [`Value`] so they can decide how to
/// treat documents that do not have the shape of a [`Report`].
pub trait ReportFormatter: Send + Sync {
    /// The format type key this formatter handles.
    fn format_type(&self) -> &str;

    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    /// Renders a report document.
    fn format(&self, report: &Value) -> ReportResult<String>;

    /// Renders a typed report.
    fn format_report(&self, report: &Report) -> ReportResult<String> {
        self.format(&report.to_value()?)
    }
}

/// Constructor registered for a format type.
pub type FormatterFactory = Factory<dyn ReportFormatter>;

fn json_formatter() -> Box<dyn ReportFormatter> {
    Box::new(JsonFormatter)
}

fn text_formatter() -> Box<dyn ReportFormatter> {
    Box::new(TextFormatter)
}

fn formatters() -> &'static Registry<dyn ReportFormatter> {
    static FORMATTERS: OnceLock<Registry<dyn ReportFormatter>> = OnceLock::new();
    FORMATTERS.get_or_init(|| {
        Registry::with_entries([
            (JSON_FORMAT, json_formatter as FormatterFactory),
            (TEXT_FORMAT, text_formatter as FormatterFactory),
        ])
    })
}

/// Registers a formatter factory for a format type, replacing any previous one.
pub fn register_formatter(format_type: impl Into<String>, factory: FormatterFactory) {
    formatters().register(format_type, factory);
}

/// Returns a new formatter for the format type, or `None` if it is unknown.
///
/// # Example
///
/// ```
/// use payout_report::formatters::get_formatter;
///
/// assert!(get_formatter("json").is_some());
/// assert!(get_formatter("xml").is_none());
/// ```
pub fn get_formatter(format_type: &str) -> Option<Box<dyn ReportFormatter>> {
    formatters().get(format_type)
}

/// Registered format types in sorted order.
pub fn formatter_types() -> Vec<String> {
    formatters().keys()
}
