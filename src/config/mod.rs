//! Configuration loading for report runs.
//!
//! This module loads run defaults (report type, output format, destination)
//! from a YAML file. Callers such as the command line or the HTTP API let
//! explicit arguments take precedence over these values.
//!
//! # Example
//!
//! ```no_run
//! use payout_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payout.yaml").unwrap();
//! println!("Report type: {}", config.config().report);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::PipelineConfig;
