//! Report output destinations.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::error::{ReportError, ReportResult};

/// Where a rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSink {
    /// Print to standard output.
    #[default]
    Console,
    /// Write to a file, replacing any existing content.
    File(PathBuf),
}

impl OutputSink {
    /// Builds a sink from an optional output path.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputSink::Console, OutputSink::File)
    }
}

/// Writes rendered content to the sink.
///
/// File sinks overwrite unconditionally; deciding whether that is allowed
/// is up to the caller.
///
/// # Errors
///
/// Returns [`ReportError::OutputWrite`] if the file or standard output
/// cannot be written.
pub fn write_output(content: &str, sink: &OutputSink) -> ReportResult<()> {
    match sink {
        OutputSink::Console => {
            write_console(&mut io::stdout().lock(), content).map_err(|e| ReportError::OutputWrite {
                path: "<stdout>".to_string(),
                message: e.to_string(),
            })
        }
        OutputSink::File(path) => {
            fs::write(path, content).map_err(|e| ReportError::OutputWrite {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            info!(path = %path.display(), bytes = content.len(), "Report written to file");
            Ok(())
        }
    }
}

fn write_console<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    writeln!(out, "{}", content)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "old content that is longer").unwrap();

        write_output("new", &OutputSink::File(path.clone())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_unwritable_destination_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("report.txt");

        match write_output("content", &OutputSink::File(path)) {
            Err(ReportError::OutputWrite { path, .. }) => assert!(path.ends_with("report.txt")),
            other => panic!("Expected OutputWrite error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(OutputSink::from_path(None), OutputSink::Console);
        assert_eq!(
            OutputSink::from_path(Some(PathBuf::from("out.json"))),
            OutputSink::File(PathBuf::from("out.json"))
        );
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_write_appends_newline() {
        let mut out = Vec::new();
        write_console(&mut out, "report").unwrap();
        assert_eq!(out, b"report\n");
    }

    #[test]
    fn test_console_write_reports_closed_pipe() {
        let err = write_console(&mut ClosedPipe, "report").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_console_sink_succeeds() {
        assert!(write_output("to stdout", &OutputSink::Console).is_ok());
    }
}
