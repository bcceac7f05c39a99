//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Prints the standard cost variance report for one month of production.
#[derive(Debug, Parser)]
#[command(name = "costos", version, about)]
pub struct Args {
    /// JSON file with the cost form values, or `-` to read stdin.
    ///
    /// Unparseable values count as zero; unquoted numbers beyond the `f64`
    /// range (e.g. `1e400`) make the whole file invalid.
    pub input: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Month name, overriding the one in the input file.
    #[arg(short, long)]
    pub period: Option<String>,
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables.
    Text,
    /// Pretty-printed JSON.
    Json,
}
