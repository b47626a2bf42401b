//! Configuration types for report runs.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatters::JSON_FORMAT;
use crate::generators::PAYOUT_REPORT;
use crate::pipeline::OutputSink;

/// Defaults for a report run.
///
/// Every field is optional in the file; omitted fields take the defaults
/// below.
///
/// ```yaml
/// report: payout
/// format: text
/// output: reports/payout.txt
/// overwrite: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Report type key (default `payout`).
    pub report: String,
    /// Format type key (default `json`).
    pub format: String,
    /// Output file; the console when absent.
    pub output: Option<PathBuf>,
    /// Whether an existing output file may be replaced.
    pub overwrite: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            report: PAYOUT_REPORT.to_string(),
            format: JSON_FORMAT.to_string(),
            output: None,
            overwrite: false,
        }
    }
}

impl PipelineConfig {
    /// The sink described by `output`.
    pub fn sink(&self) -> OutputSink {
        OutputSink::from_path(self.output.clone())
    }
}
