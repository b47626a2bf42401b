//! Application state for the payout report API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PipelineConfig;

/// Shared application state.
///
/// Holds the run defaults applied to requests that leave the report or
/// format type unspecified.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PipelineConfig>,
}

impl AppState {
    /// Creates a new application state with the given defaults.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configured defaults.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
