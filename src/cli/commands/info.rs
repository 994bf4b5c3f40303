//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_or_default, InfoArgs, OutputFormat};
use std::path::Path;

/// Print the effective spec. The positional path wins over the global
/// `--config`; with neither, the defaults are shown.
pub fn run_info(args: &InfoArgs, global: Option<&Path>, level: LogLevel) -> Result<(), String> {
    let path = args.config.as_deref().or(global);
    let spec = load_or_default(path).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            match path {
                Some(p) => log(
                    level,
                    LogLevel::Normal,
                    &format!("Configuration Info: {}", p.display()),
                ),
                None => log(level, LogLevel::Normal, "Configuration Info: defaults"),
            }
            println!();
            println!("Aggregate: {}", spec.aggregate.input.display());
            println!(
                "  Group keys: {:?}",
                spec.aggregate.settings.group_keys
            );
            println!("Balance: {}", spec.balance.input.display());
            println!(
                "  k = {}, seed = {}",
                spec.balance.settings.k_neighbors, spec.balance.settings.seed
            );
            println!("Train: {}", spec.train.data.display());
            println!("  Test size: {}", spec.train.test_size);
            println!("Predict: {}", spec.predict.input.display());

            if spec.predict.fallback.is_none() {
                println!("Prediction fallback: disabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
