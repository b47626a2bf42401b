//! Payout report generation.
//!
//! Each record becomes one line item paying `hours_worked * rate`. The rate
//! comes from the first column present out of `hourly_rate`, `rate` and
//! `salary`, so files exported by different tools can be mixed in one run.

use tracing::{info, warn};

use crate::error::{ReportError, ReportResult};
use crate::models::{Record, Report, ReportLineItem};

use super::factory::ReportGenerator;

/// Report type key of the payout report.
pub const PAYOUT_REPORT: &str = "payout";

/// Column holding the hours worked.
pub const HOURS_COLUMN: &str = "hours_worked";

/// Rate columns, in lookup priority order.
pub const RATE_COLUMNS: [&str; 3] = ["hourly_rate", "rate", "salary"];

/// Generates the `payout` report.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutReportGenerator;

impl PayoutReportGenerator {
    /// Interprets one record as a payout line item.
    ///
    /// Missing `name`/`department` default to empty strings, missing hours or
    /// rate to `0`. Only the first present rate column is considered; if its
    /// value does not parse the record is rejected rather than falling back to
    /// a lower-priority column.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidNumber`] when the hours, the selected
    /// rate value or their product is not a finite number.
    ///
    /// # Example
    ///
    /// ```
    /// use payout_report::generators::PayoutReportGenerator;
    /// use payout_report::models::Record;
    ///
    /// let record = Record::from_row(
    ///     &["name", "hours_worked", "rate", "salary"],
    ///     &["Bob Smith", "150", "40", "9000"],
    /// );
    /// let item = PayoutReportGenerator::line_item(&record).unwrap();
    /// assert_eq!(item.rate(), 40.0);
    /// assert_eq!(item.amount(), 6000.0);
    /// ```
    pub fn line_item(record: &Record) -> ReportResult<ReportLineItem> {
        let name = record.get("name").unwrap_or_default();
        let department = record.get("department").unwrap_or_default();

        let hours = match record.get(HOURS_COLUMN) {
            Some(raw) => parse_number(name, HOURS_COLUMN, raw)?,
            None => 0.0,
        };

        let rate = match RATE_COLUMNS
            .iter()
            .find_map(|column| record.get(column).map(|raw| (*column, raw)))
        {
            Some((column, raw)) => parse_number(name, column, raw)?,
            None => 0.0,
        };

        let item = ReportLineItem::new(name, department, hours, rate);
        if !item.amount().is_finite() {
            return Err(ReportError::InvalidNumber {
                employee: name.to_string(),
                field: "amount".to_string(),
                message: format!("{} * {} is not a finite number", hours, rate),
            });
        }

        Ok(item)
    }
}

impl ReportGenerator for PayoutReportGenerator {
    fn report_type(&self) -> &str {
        PAYOUT_REPORT
    }

    fn generate(&self, records: &[Record]) -> Report {
        let mut items = Vec::with_capacity(records.len());
        let mut total = 0.0;

        for record in records {
            match Self::line_item(record) {
                Ok(item) if !(total + item.amount()).is_finite() => warn!(
                    employee = item.name(),
                    amount = item.amount(),
                    "Skipping employee record: total would overflow"
                ),
                Ok(item) => {
                    total += item.amount();
                    items.push(item);
                }
                Err(err) => warn!(error = %err, "Skipping employee record"),
            }
        }

        let report = Report::new(PAYOUT_REPORT, items);
        info!(
            records = records.len(),
            items = report.items().len(),
            total = report.total(),
            "Generated payout report"
        );
        report
    }
}

fn parse_number(employee: &str, field: &str, raw: &str) -> ReportResult<f64> {
    let invalid = |message: String| ReportError::InvalidNumber {
        employee: employee.to_string(),
        field: field.to_string(),
        message,
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| invalid(format!("'{}' is not a number ({})", raw, e)))?;

    if !value.is_finite() {
        return Err(invalid(format!("'{}' is not a finite number", raw)));
    }

    Ok(value)
}
