//! Request types for the payout report API.
//!
//! This module defines the JSON request structure for the `/reports` endpoint.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Request body for the `/reports` endpoint.
///
/// `report` and `format` fall back to the server's configured defaults when
/// omitted.
///
/// # Example
///
/// ```
/// use payout_report::api::ReportRequest;
///
/// let request: ReportRequest = serde_json::from_str(
///     r#"{"files": ["data1.csv", "data2.csv"], "format": "text"}"#,
/// ).unwrap();
/// assert_eq!(request.files.len(), 2);
/// assert_eq!(request.report, None);
/// assert_eq!(request.format.as_deref(), Some("text"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Input files, readable by the server process.
    pub files: Vec<PathBuf>,
    /// Report type key.
    #[serde(default)]
    pub report: Option<String>,
    /// Format type key.
    #[serde(default)]
    pub format: Option<String>,
}
