//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, PipelineSpec, ValidateArgs};

/// Stage inputs and outputs, one line each
pub fn format_paths(spec: &PipelineSpec) -> String {
    let fallback = spec
        .predict
        .fallback
        .as_ref()
        .map_or_else(|| "none".to_string(), |p| p.display().to_string());
    [
        format!(
            "  aggregate: {} -> {}{}",
            spec.aggregate.input.display(),
            spec.aggregate.output.display(),
            if spec.aggregate.append { " (append)" } else { "" }
        ),
        format!(
            "  balance:   {} -> {}",
            spec.balance.input.display(),
            spec.balance.output.display()
        ),
        format!(
            "  train:     {} -> {}, {}",
            spec.train.data.display(),
            spec.train.model.display(),
            spec.train.label_encoder.display()
        ),
        format!(
            "  predict:   {} (fallback {fallback}) -> {}",
            spec.predict.input.display(),
            spec.predict.output.display()
        ),
    ]
    .join("\n")
}

/// Balancing and training parameters
pub fn format_parameters(spec: &PipelineSpec) -> String {
    let balance = &spec.balance.settings;
    let policy = &spec.aggregate.settings.policy;
    [
        format!("  Label candidates: {:?}", spec.schema.label_candidates),
        format!("  Sniffed rows per column: {}", spec.schema.sample_rows),
        format!(
            "  Interpolation: k = {}, min support = {}, seed = {}",
            balance.k_neighbors, balance.min_interpolation_support, balance.seed
        ),
        format!(
            "  Labeling: failed >= {} and commands <= {} -> {}; commands >= {} -> {}",
            policy.brute_force_min_failed,
            policy.brute_force_max_commands,
            policy.brute_force_label,
            policy.injection_min_commands,
            policy.injection_label
        ),
        format!(
            "  Test size: {}, seed = {}, trees = {}",
            spec.train.test_size, spec.train.seed, spec.train.n_trees
        ),
    ]
    .join("\n")
}

pub fn run_validate(args: &ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    // load_config validates
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        println!();
        println!("Stages:");
        println!("{}", format_paths(&spec));
        println!();
        println!("Parameters:");
        println!("{}", format_parameters(&spec));
    }

    Ok(())
}
