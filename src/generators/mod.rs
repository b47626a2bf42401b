//! Report generators and their registry.
//!
//! A generator turns aggregated [`Record`](crate::models::Record)s into a
//! [`Report`](crate::models::Report). Generators are looked up by report type
//! key; `payout` is registered out of the box and more can be added with
//! [`register_generator`].

mod factory;
mod payout;

pub use factory::{
    GeneratorFactory, ReportGenerator, generator_types, get_generator, register_generator,
};
pub use payout::{HOURS_COLUMN, PAYOUT_REPORT, PayoutReportGenerator, RATE_COLUMNS};
