//! Core data models for the payout report engine.
//!
//! Records are the raw rows read from input files; reports are what the
//! generators build from them.

mod record;
mod report;

pub use record::Record;
pub use report::{Report, ReportLineItem};
