//! CLI command implementations

mod aggregate;
mod balance;
mod info;
mod inspect;
mod predict;
mod train;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_or_default, validate_config, Cli, Command, PipelineSpec};
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);
    let spec_path = cli.spec.as_deref();

    match &cli.command {
        Command::Aggregate(_) => {
            aggregate::run_aggregate(&effective_spec(spec_path, &cli.command)?, log_level)
        }
        Command::Balance(_) => {
            balance::run_balance(&effective_spec(spec_path, &cli.command)?, log_level)
        }
        Command::Train(_) => train::run_train(&effective_spec(spec_path, &cli.command)?, log_level),
        Command::Predict(_) => {
            predict::run_predict(&effective_spec(spec_path, &cli.command)?, log_level)
        }
        Command::Inspect(args) => {
            inspect::run_inspect(args, &effective_spec(spec_path, &cli.command)?, log_level)
        }
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, spec_path, log_level),
    }
}

/// Spec file (or defaults) with the command's overrides applied and rechecked
fn effective_spec(path: Option<&Path>, command: &Command) -> Result<PipelineSpec, String> {
    let mut spec = load_or_default(path).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, command);
    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;
    Ok(spec)
}
