//! Payout report engine for tabular employee data.
//!
//! This crate reads comma-separated employee files, computes a payout report
//! (hours × rate per employee plus a grand total) and renders it as JSON or
//! as an aligned text table. Report generators and output formatters are
//! pluggable through process-wide registries.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod formatters;
pub mod generators;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod registry;
