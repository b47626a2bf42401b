//! Fixed-width plain text output.
//!
//! ```text
//! --------------------------------------------------------------------------------
//! Name                           | Department           | Hours      | Rate       | Amount
//! --------------------------------------------------------------------------------
//! Alice Johnson                  | Marketing            |      160.0 |      50.00 |    8000.00
//! --------------------------------------------------------------------------------
//! Total                                                                      |    8000.00
//! --------------------------------------------------------------------------------
//! ```

use serde_json::Value;

use crate::error::ReportResult;

use super::factory::ReportFormatter;

/// Format type key of the text formatter.
pub const TEXT_FORMAT: &str = "text";

/// Returned instead of a table when the document has no usable `items`/`total`.
pub const NO_DATA_MESSAGE: &str = "No data to format";

const RULE_WIDTH: usize = 80;
const TOTAL_LABEL_WIDTH: usize = 74;

/// Renders reports as an aligned text table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_type(&self) -> &str {
        TEXT_FORMAT
    }

    /// Renders the table, or [`NO_DATA_MESSAGE`] when `items` is not an
    /// array or `total` is not a number.
    fn format(&self, report: &Value) -> ReportResult<String> {
        let (Some(items), Some(total)) = (
            report.get("items").and_then(Value::as_array),
            report.get("total").and_then(Value::as_f64),
        ) else {
            return Ok(NO_DATA_MESSAGE.to_string());
        };

        let rule = "-".repeat(RULE_WIDTH);
        let mut lines = Vec::with_capacity(items.len() + 6);

        lines.push(rule.clone());
        lines.push(format!(
            "{:30} | {:20} | {:10} | {:10} | {:10}",
            "Name", "Department", "Hours", "Rate", "Amount"
        ));
        lines.push(rule.clone());

        for item in items {
            lines.push(format!(
                "{:30} | {:20} | {:>10.1} | {:>10.2} | {:>10.2}",
                text_field(item, "name"),
                text_field(item, "department"),
                number_field(item, "hours"),
                number_field(item, "rate"),
                number_field(item, "amount"),
            ));
        }

        lines.push(rule.clone());
        lines.push(format!("{:width$} | {:>10.2}", "Total", total, width = TOTAL_LABEL_WIDTH));
        lines.push(rule);

        Ok(lines.join("\n"))
    }
}

fn text_field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn number_field(item: &Value, key: &str) -> f64 {
    item.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
