//! Structured (JSON) output.

use serde_json::Value;

use crate::error::ReportResult;

use super::factory::ReportFormatter;

/// Format type key of the JSON formatter.
pub const JSON_FORMAT: &str = "json";

/// Renders reports as indented JSON.
///
/// Keys keep their insertion order, non-ASCII text is written verbatim and
/// floats are written so that parsing them back gives the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_type(&self) -> &str {
        JSON_FORMAT
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn format(&self, report: &Value) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
