//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! honeyset aggregate --input real_attack_data.csv
//! honeyset balance --seed 7
//! honeyset train --test-size 0.25
//! honeyset predict --input X_test.csv --output predictions.csv
//! honeyset inspect feature_engineered_data.csv --format json
//! honeyset -c pipeline.yaml balance
//! honeyset validate pipeline.yaml
//! honeyset info pipeline.yaml --format yaml
//! ```

mod core;
mod types;

pub use core::{
    apply_overrides, parse_args, AggregateArgs, BalanceArgs, Cli, Command, InfoArgs, InspectArgs,
    PredictArgs, TrainArgs, ValidateArgs,
};
pub use types::OutputFormat;


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_seed_override(seed in any::<u64>()) {
            let seed_str = seed.to_string();
            let cli = parse_args(["honeyset", "balance", "--seed", &seed_str]).unwrap();
            match cli.command {
                Command::Balance(args) => prop_assert_eq!(args.seed, Some(seed)),
                _ => prop_assert!(false, "Expected Balance command"),
            }
        }

        #[test]
        fn prop_inspect_path_parses(path in "[a-zA-Z][a-zA-Z0-9_-]{0,20}\\.csv") {
            let cli = parse_args(["honeyset", "inspect", &path]).unwrap();
            match cli.command {
                Command::Inspect(args) => prop_assert_eq!(args.input.to_str().unwrap(), &path),
                _ => prop_assert!(false, "Expected Inspect command"),
            }
        }

        #[test]
        fn prop_output_format_case_insensitive(
            format in prop::sample::select(vec!["text", "TEXT", "Text", "json", "JSON", "yaml", "Yaml"])
        ) {
            prop_assert!(format.parse::<OutputFormat>().is_ok());
        }
    }
}
