//! Crepería cost report CLI
//!
//! Reads one month of cost form values and prints the standard cost
//! variance report.

mod cli;
mod render;

use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use creperia_core::costing::{CostElementCatalog, CostingEngine, RawCostInputs};
use creperia_shared::{AppConfig, AppError, AppResult};

use crate::cli::{Args, OutputFormat};

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{err}");
            return Ok(ExitCode::from(err.exit_code()));
        }
    };

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&args, &config) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write report")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

fn run(args: &Args, config: &AppConfig) -> AppResult<String> {
    let catalog = CostElementCatalog::new(config.report.element_pairs())?;
    let engine = CostingEngine::new(catalog);

    let mut raw = read_inputs(&args.input)?;
    if let Some(period) = &args.period {
        raw.period = Some(period.clone());
    }

    let report = engine.compute_raw(&raw);
    info!(
        period = report.period.as_deref().unwrap_or("-"),
        total_variance = %report.totals.diff,
        status = report.totals.status.label(),
        "cost report computed"
    );

    match args.format {
        OutputFormat::Text => render::render_text(&report, &config.report)
            .map_err(|e| AppError::Internal(format!("cannot render report: {e}"))),
        OutputFormat::Json => serde_json::to_string_pretty(&report)
            .map(|json| json + "\n")
            .map_err(|e| AppError::Internal(format!("cannot serialize report: {e}"))),
    }
}

fn read_inputs(path: &Path) -> AppResult<RawCostInputs> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| AppError::Input(format!("cannot read stdin: {e}")))?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| AppError::Input(format!("cannot read {}: {e}", path.display())))?
    };

    parse_inputs(&text)
}

/// Decodes the input snapshot.
///
/// Field values of any JSON type are accepted, but numeric literals outside
/// the `f64` range (such as `1e400`) are rejected by the JSON reader itself
/// and fail as an input error. Quote them to have them read as zero.
fn parse_inputs(text: &str) -> AppResult<RawCostInputs> {
    serde_json::from_str(text).map_err(|e| AppError::Input(format!("invalid input JSON: {e}")))
}
