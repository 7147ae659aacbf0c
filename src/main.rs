//! ahp-sherpa - Evaluate an AHP session snapshot
//!
//! Reads a JSON or YAML snapshot, recomputes weights, consistency and the
//! final ranking, and prints the report as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use ahp_sherpa::adapters::storage::session_file;
use ahp_sherpa::application::SessionEvaluator;
use ahp_sherpa::config::{AppConfig, LoggingConfig};
use ahp_sherpa::domain::foundation::{DomainError, ErrorCode};

/// Evaluate an AHP session snapshot
#[derive(Parser)]
#[command(name = "ahp-sherpa")]
#[command(version)]
#[command(about = "Priority weights, consistency ratios and ranking for an AHP session")]
struct Cli {
    /// Session snapshot (.json, .yaml or .yml)
    snapshot: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ahp-sherpa: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                snapshot = %cli.snapshot.display(),
                code = %e.code,
                error = %e.message,
                "Evaluation failed"
            );
            eprintln!("ahp-sherpa: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<String, DomainError> {
    let session = session_file::load(&cli.snapshot)?;
    info!(
        snapshot = %cli.snapshot.display(),
        criteria = session.criteria().len(),
        alternatives = session.alternatives().len(),
        "Loaded session"
    );

    let report = SessionEvaluator::new(&config.analysis).evaluate(&session)?;
    info!(furthest_step = ?report.furthest_step, "Evaluated session");

    let rendered = if cli.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    };
    rendered.map_err(|e| DomainError::new(ErrorCode::SerializationFailed, e.to_string()))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if logging.json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
