//! CLI for the schedule benchmark
//!
//! # Usage
//!
//! ```bash
//! # Validate a sweep specification
//! recocer validate sweep.yaml
//!
//! # Show schedule parameters and curve summaries
//! recocer info sweep.yaml
//!
//! # Sample every schedule into a comparison table
//! recocer sample sweep.yaml --output curves.csv
//! recocer sample sweep.yaml --output curves.json --format json --stride 50
//! ```

mod commands;
mod logging;

pub use commands::{run_command, CliError};
pub use logging::LogLevel;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Recocer: Learning-Rate Schedule Benchmark
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "recocer")]
#[command(version)]
#[command(about = "Sample and compare learning-rate schedules for LM pretraining")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a sweep specification without sampling
    Validate(ValidateArgs),

    /// Display schedule parameters and curve summaries
    Info(InfoArgs),

    /// Sample every schedule and write a comparison table
    Sample(SampleArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML sweep specification
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML sweep specification
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,
}

/// Arguments for the sample command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SampleArgs {
    /// Path to YAML sweep specification
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Output file for the comparison table
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Override the sampling stride from the spec
    #[arg(long)]
    pub stride: Option<usize>,
}

/// Comparison table output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Side-by-side CSV table, one column per schedule
    Csv,
    /// Long CSV table, one step,name,rate row per point
    CsvLong,
    /// JSON array of labeled point lists
    Json,
}
