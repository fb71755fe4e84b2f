//! CLI command handlers

use super::logging::{log, LogLevel};
use super::{Cli, Command, InfoArgs, OutputFormat, SampleArgs, ValidateArgs};
use crate::config::{SpecError, SweepSpec};
use crate::curve::{write_csv, write_csv_long, write_json, RateCurve};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced to the CLI user
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute the parsed CLI command
pub fn run_command(cli: Cli) -> Result<(), CliError> {
    let level = LogLevel::from_flags(cli.verbose, cli.quiet);
    match cli.command {
        Command::Validate(args) => run_validate(&args, level),
        Command::Info(args) => run_info(&args, level),
        Command::Sample(args) => run_sample(&args, level),
    }
}

fn run_validate(args: &ValidateArgs, level: LogLevel) -> Result<(), CliError> {
    let spec = SweepSpec::load(&args.spec)?;
    for named in &spec.schedules {
        log(level, LogLevel::Verbose, &format!("  ok: {} ({})", named.name, named.schedule.family()));
    }
    log(
        level,
        LogLevel::Normal,
        &format!("{}: {} schedules valid", args.spec.display(), spec.schedules.len()),
    );
    Ok(())
}

fn run_info(args: &InfoArgs, level: LogLevel) -> Result<(), CliError> {
    let spec = SweepSpec::load(&args.spec)?;
    log(
        level,
        LogLevel::Normal,
        &format!("Sweep: {} schedules, {} steps, stride {}", spec.schedules.len(), spec.total_steps, spec.stride),
    );
    for named in &spec.schedules {
        let curve = RateCurve::sample(&named.name, &named.schedule, spec.total_steps, spec.stride);
        let summary = curve.summary();
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  {:<20} {:<14} initial={:.3e} peak={:.3e} terminal={:.3e} mean={:.3e}",
                named.name,
                named.schedule.family(),
                summary.initial,
                summary.peak,
                summary.terminal,
                summary.mean,
            ),
        );
    }
    Ok(())
}

fn run_sample(args: &SampleArgs, level: LogLevel) -> Result<(), CliError> {
    let mut spec = SweepSpec::load(&args.spec)?;
    if let Some(stride) = args.stride {
        spec.stride = stride.max(1);
    }

    let curves: Vec<RateCurve> = spec
        .schedules
        .iter()
        .map(|named| RateCurve::sample(&named.name, &named.schedule, spec.total_steps, spec.stride))
        .collect();

    write_curves(&args.output, args.format, &curves)?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Wrote {} curves x {} points to {}",
            curves.len(),
            curves.first().map_or(0, |c| c.points.len()),
            args.output.display(),
        ),
    );
    Ok(())
}

fn write_curves(path: &Path, format: OutputFormat, curves: &[RateCurve]) -> Result<(), CliError> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => write_csv(&mut writer, curves)?,
        OutputFormat::CsvLong => write_csv_long(&mut writer, curves)?,
        OutputFormat::Json => write_json(&mut writer, curves)?,
    }
    Ok(())
}
