//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::PipelineSpec;

/// Honeyset: honeypot log normalization, balancing and inference
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "honeyset")]
#[command(version)]
#[command(
    about = "Normalize honeypot logs into canonical features, balance attack classes, train and predict"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Pipeline YAML spec (defaults apply when omitted)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub spec: Option<PathBuf>,

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
    /// Aggregate a honeypot event table into per-session feature rows
    Aggregate(AggregateArgs),

    /// Normalize a feature file and equalize its label frequencies
    Balance(BalanceArgs),

    /// Train a classifier on a balanced dataset
    Train(TrainArgs),

    /// Predict attack types for new feature rows
    Predict(PredictArgs),

    /// Show how a CSV file would be resolved and balanced
    Inspect(InspectArgs),

    /// Validate a pipeline spec
    Validate(ValidateArgs),

    /// Display the effective pipeline spec
    Info(InfoArgs),
}

/// Arguments for the aggregate command
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct AggregateArgs {
    /// Override the event table path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the feature file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace the feature file instead of appending to it
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the balance command
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct BalanceArgs {
    /// Override the feature file path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the balanced dataset path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Neighbours considered for interpolation
    #[arg(short, long)]
    pub k_neighbors: Option<usize>,
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct TrainArgs {
    /// Override the balanced dataset path
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Override the model artifact path
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Override the label encoding path
    #[arg(short, long)]
    pub label_encoder: Option<PathBuf>,

    /// Held-out fraction
    #[arg(short, long)]
    pub test_size: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trees in the random forest
    #[arg(long)]
    pub trees: Option<u16>,
}

/// Arguments for the predict command
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct PredictArgs {
    /// Override the input feature file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the predictions path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the model artifact path
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Override the label encoding path
    #[arg(short, long)]
    pub label_encoder: Option<PathBuf>,

    /// Override the fallback feature file
    #[arg(long, conflicts_with = "no_fallback")]
    pub fallback: Option<PathBuf>,

    /// Fail instead of falling back when the input is unusable
    #[arg(long)]
    pub no_fallback: bool,
}

/// Arguments for the inspect command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InspectArgs {
    /// CSV file to inspect
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file (defaults when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a PipelineSpec
///
/// Only the section belonging to `command` is touched.
pub fn apply_overrides(spec: &mut PipelineSpec, command: &Command) {
    match command {
        Command::Aggregate(args) => {
            if let Some(input) = &args.input {
                spec.aggregate.input = input.clone();
            }
            if let Some(output) = &args.output {
                spec.aggregate.output = output.clone();
            }
            if args.overwrite {
                spec.aggregate.append = false;
            }
        }
        Command::Balance(args) => {
            if let Some(input) = &args.input {
                spec.balance.input = input.clone();
            }
            if let Some(output) = &args.output {
                spec.balance.output = output.clone();
            }
            if let Some(seed) = args.seed {
                spec.balance.settings.seed = seed;
            }
            if let Some(k) = args.k_neighbors {
                spec.balance.settings.k_neighbors = k;
            }
        }
        Command::Train(args) => {
            if let Some(data) = &args.data {
                spec.train.data = data.clone();
            }
            if let Some(model) = &args.model {
                spec.train.model = model.clone();
            }
            if let Some(label_encoder) = &args.label_encoder {
                spec.train.label_encoder = label_encoder.clone();
            }
            if let Some(test_size) = args.test_size {
                spec.train.test_size = test_size;
            }
            if let Some(seed) = args.seed {
                spec.train.seed = seed;
            }
            if let Some(trees) = args.trees {
                spec.train.n_trees = trees;
            }
        }
        Command::Predict(args) => {
            if let Some(input) = &args.input {
                spec.predict.input = input.clone();
            }
            if let Some(output) = &args.output {
                spec.predict.output = output.clone();
            }
            if let Some(model) = &args.model {
                spec.predict.model = model.clone();
            }
            if let Some(label_encoder) = &args.label_encoder {
                spec.predict.label_encoder = label_encoder.clone();
            }
            if let Some(fallback) = &args.fallback {
                spec.predict.fallback = Some(fallback.clone());
            }
            if args.no_fallback {
                spec.predict.fallback = None;
            }
        }
        Command::Inspect(_) | Command::Validate(_) | Command::Info(_) => {}
    }
}
