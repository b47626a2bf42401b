//! Report models produced by the report generators.
//!
//! This module contains the [`Report`] type and its [`ReportLineItem`] rows.
//! Both types compute their derived numbers at construction, so an item's
//! `amount` and a report's `total` can never disagree with the values they
//! are derived from.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReportResult;

/// One employee row of a report.
///
/// # Example
///
/// ```
/// use payout_report::models::ReportLineItem;
///
/// let item = ReportLineItem::new("Alice Johnson", "Marketing", 160.0, 50.0);
/// assert_eq!(item.amount(), 8000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLineItem {
    name: String,
    department: String,
    hours: f64,
    rate: f64,
    amount: f64,
}

impl ReportLineItem {
    /// Creates a line item, computing `amount = hours * rate`.
    pub fn new(name: impl Into<String>, department: impl Into<String>, hours: f64, rate: f64) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            hours,
            rate,
            amount: hours * rate,
        }
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Hours worked.
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Rate applied per hour.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Payout for this row (`hours * rate`).
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// A generated report: its type key, ordered line items and grand total.
///
/// The field order here is the key order of the structured output:
/// `report_type`, `items`, `total`.
///
/// # Example
///
/// ```
/// use payout_report::models::{Report, ReportLineItem};
///
/// let report = Report::new(
///     "payout",
///     vec![
///         ReportLineItem::new("Alice Johnson", "Marketing", 160.0, 50.0),
///         ReportLineItem::new("Bob Smith", "Design", 150.0, 40.0),
///     ],
/// );
/// assert_eq!(report.total(), 14000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    report_type: String,
    items: Vec<ReportLineItem>,
    total: f64,
}

impl Report {
    /// Creates a report, summing item amounts in order to get the total.
    pub fn new(report_type: impl Into<String>, items: Vec<ReportLineItem>) -> Self {
        let total = items.iter().map(ReportLineItem::amount).fold(0.0, |acc, amount| acc + amount);
        Self {
            report_type: report_type.into(),
            items,
            total,
        }
    }

    /// The report type key (e.g. `"payout"`).
    pub fn report_type(&self) -> &str {
        &self.report_type
    }

    /// Line items in input order.
    pub fn items(&self) -> &[ReportLineItem] {
        &self.items
    }

    /// Sum of all item amounts.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Converts the report into the structured document formatters consume.
    pub fn to_value(&self) -> ReportResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
