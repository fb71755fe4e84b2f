//! Recocer CLI
//!
//! Entry point for the schedule benchmark command line.
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
//! ```

use clap::Parser;
use recocer::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
