//! Command-line front end for the payout report engine.
//!
//! `payout-report report` renders a report from CSV files to the console or
//! a file; `payout-report serve` exposes the same pipeline over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payout_report::api::{AppState, create_router};
use payout_report::config::{ConfigLoader, PipelineConfig};
use payout_report::error::{ReportError, ReportResult};
use payout_report::pipeline::{
    OutputSink, resolve_formatter, resolve_generator, run, validate_input_paths,
};

/// Employee payout reports from CSV files
#[derive(Parser, Debug)]
#[command(name = "payout-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML file with run defaults
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a report from one or more CSV files
    Report {
        /// CSV files with employee data
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Report type (e.g. payout)
        #[arg(short, long)]
        report: Option<String>,

        /// Output format (json or text)
        #[arg(short, long)]
        format: Option<String>,

        /// Write the report to this file instead of the console
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Replace the output file if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so console reports stay clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> ReportResult<()> {
    let defaults = match &cli.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => PipelineConfig::default(),
    };

    match cli.command {
        Command::Report {
            files,
            report,
            format,
            output,
            force,
        } => {
            let config = PipelineConfig {
                report: report.unwrap_or(defaults.report),
                format: format.unwrap_or(defaults.format),
                output: output.or(defaults.output),
                overwrite: force || defaults.overwrite,
            };
            report_command(&files, &config)
        }
        Command::Serve { bind } => serve_command(bind, defaults),
    }
}

fn report_command(files: &[PathBuf], config: &PipelineConfig) -> ReportResult<()> {
    let files = validate_input_paths(files);
    if files.is_empty() {
        return Err(ReportError::NoValidFiles);
    }

    resolve_generator(&config.report)?;
    resolve_formatter(&config.format)?;

    if let Some(path) = &config.output {
        if path.exists() && !config.overwrite {
            return Err(ReportError::OutputExists {
                path: path.display().to_string(),
            });
        }
    }

    let sink = config.sink();
    run(&files, &config.report, &config.format, &sink)?;

    if let OutputSink::File(path) = &sink {
        info!(path = %path.display(), "Report saved");
    }
    Ok(())
}

fn serve_command(bind: SocketAddr, defaults: PipelineConfig) -> ReportResult<()> {
    let server_error = |e: std::io::Error| ReportError::Server {
        address: bind.to_string(),
        message: e.to_string(),
    };

    let runtime = tokio::runtime::Runtime::new().map_err(server_error)?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(bind).await.map_err(server_error)?;
        info!(address = %bind, "Serving payout report API");

        axum::serve(listener, create_router(AppState::new(defaults)))
            .await
            .map_err(server_error)
    })
}
