//! The [`ReportGenerator`] trait and the process-wide generator registry.

use std::sync::OnceLock;

use crate::models::{Record, Report};
use crate::registry::{Factory, Registry};

use super::payout::{PAYOUT_REPORT, PayoutReportGenerator};

/// Builds a [`Report`] of one type from aggregated records.
pub trait ReportGenerator: Send + Sync {
    /// The report type key this generator produces.
    fn report_type(&self) -> &str;

    /// Generates a report from records, in record order.
    ///
    /// Records that cannot be interpreted are logged and left out; generation
    /// itself never fails.
    fn generate(&self, records: &[Record]) -> Report;
}

/// Constructor registered for a report type.
pub type GeneratorFactory = Factory<dyn ReportGenerator>;

fn payout_generator() -> Box<dyn ReportGenerator> {
    Box::new(PayoutReportGenerator)
}

fn generators() -> &'static Registry<dyn ReportGenerator> {
    static GENERATORS: OnceLock<Registry<dyn ReportGenerator>> = OnceLock::new();
    GENERATORS.get_or_init(|| {
        Registry::with_entries([(PAYOUT_REPORT, payout_generator as GeneratorFactory)])
    })
}

/// Registers a generator factory for a report type.
///
/// An existing registration for the same key is replaced.
///
/// # Example
///
/// ```
/// use payout_report::generators::{ReportGenerator, get_generator, register_generator};
/// use payout_report::models::{Record, Report};
///
/// struct HeadcountGenerator;
///
/// impl ReportGenerator for HeadcountGenerator {
///     fn report_type(&self) -> &str {
///         "headcount"
///     }
///
///     fn generate(&self, _records: &[Record]) -> Report {
///         Report::new("headcount", vec![])
///     }
/// }
///
/// fn headcount() -> Box<dyn ReportGenerator> {
///     Box::new(HeadcountGenerator)
/// }
///
/// register_generator("headcount", headcount);
/// assert_eq!(get_generator("headcount").unwrap().report_type(), "headcount");
/// ```
pub fn register_generator(report_type: impl Into<String>, factory: GeneratorFactory) {
    generators().register(report_type, factory);
}

/// Returns a new generator for the report type, or `None` if it is unknown.
pub fn get_generator(report_type: &str) -> Option<Box<dyn ReportGenerator>> {
    generators().get(report_type)
}

/// Registered report types in sorted order.
pub fn generator_types() -> Vec<String> {
    generators().keys()
}
