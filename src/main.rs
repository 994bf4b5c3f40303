//! Honeyset CLI
//!
//! # Usage
//!
//! ```bash
//! # Event log -> per-session features
//! honeyset aggregate --input real_attack_data.csv
//!
//! # Normalize and balance
//! honeyset balance --seed 42
//!
//! # Train and evaluate
//! honeyset train
//!
//! # Predict, falling back to the newest feature row
//! honeyset predict --input X_test.csv
//!
//! # Show how a file resolves
//! honeyset inspect feature_engineered_data.csv
//!
//! # Run every stage from one spec
//! honeyset -c pipeline.yaml balance
//! ```

use clap::Parser;
use honeyset::cli::{run_command, Cli};
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
