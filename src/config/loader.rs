//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading run defaults
//! from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};

use super::types::PipelineConfig;

/// Loads and provides access to run configuration.
///
/// # Example
///
/// ```no_run
/// use payout_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payout.yaml").unwrap();
/// println!("Default format: {}", loader.config().format);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PipelineConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// - [`ReportError::ConfigNotFound`] if the file cannot be read
    /// - [`ReportError::ConfigParseError`] if it is not valid configuration YAML
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| ReportError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, report = %config.report, format = %config.format, "Loaded configuration");
        Ok(Self { config })
    }

    /// Parses configuration YAML. An empty document yields the defaults.
    fn parse(content: &str) -> Result<PipelineConfig, String> {
        if content.trim().is_empty() {
            return Ok(PipelineConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PipelineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/payout.yaml"
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.report, "payout");
        assert_eq!(config.format, "text");
        assert_eq!(config.output, None);
        assert!(!config.overwrite);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.yaml");
        fs::write(&path, "output: out/report.json\noverwrite: true\n").unwrap();

        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config().report, "payout");
        assert_eq!(loader.config().format, "json");
        assert_eq!(loader.config().output, Some(PathBuf::from("out/report.json")));
        assert!(loader.config().overwrite);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "").unwrap();

        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config(), &PipelineConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/path/payout.yaml") {
            Err(ReportError::ConfigNotFound { path }) => {
                assert!(path.contains("payout.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "formt: text\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(&path),
            Err(ReportError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "report: [unclosed\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(&path),
            Err(ReportError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_default_sink_is_console() {
        assert_eq!(
            PipelineConfig::default().sink(),
            crate::pipeline::OutputSink::Console
        );
    }
}
