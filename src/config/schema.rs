//! Pipeline specification schema
//!
//! Every field has a default so an empty YAML document (or no file at all)
//! describes the stock pipeline: `real_attack_data.csv` →
//! `feature_engineered_data.csv` → `balanced_data.csv` → model → predictions.

use crate::align::AlignConfig;
use crate::balance::BalanceConfig;
use crate::features::AggregateConfig;
use crate::schema::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete pipeline specification
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSpec {
    /// Label and feature column discovery
    pub schema: ResolverConfig,
    /// Event log → per-session feature rows
    pub aggregate: AggregateSpec,
    /// Feature rows → balanced dataset
    pub balance: BalanceSpec,
    /// Balanced dataset → model artifact
    pub train: TrainSection,
    /// Feature rows → predictions
    pub predict: PredictSpec,
}

/// Session aggregation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateSpec {
    /// Extracted honeypot event table
    pub input: PathBuf,
    /// Per-session feature file
    pub output: PathBuf,
    /// Concatenate onto an existing output instead of replacing it
    pub append: bool,
    #[serde(flatten)]
    pub settings: AggregateConfig,
}

impl Default for AggregateSpec {
    fn default() -> Self {
        Self {
            input: PathBuf::from("real_attack_data.csv"),
            output: PathBuf::from("feature_engineered_data.csv"),
            append: true,
            settings: AggregateConfig::default(),
        }
    }
}

/// Class balancing stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSpec {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub settings: BalanceConfig,
}

impl Default for BalanceSpec {
    fn default() -> Self {
        Self {
            input: PathBuf::from("feature_engineered_data.csv"),
            output: PathBuf::from("balanced_data.csv"),
            settings: BalanceConfig::default(),
        }
    }
}

/// Training stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainSection {
    /// Balanced dataset with a `label` column
    pub data: PathBuf,
    /// Model artifact output (.json or .yaml)
    pub model: PathBuf,
    /// Label encoding output
    pub label_encoder: PathBuf,
    /// Held-out fraction, in (0, 1)
    pub test_size: f64,
    pub seed: u64,
    /// Trees in the random forest
    pub n_trees: u16,
    /// Pretty-print artifacts
    pub pretty: bool,
}

impl Default for TrainSection {
    fn default() -> Self {
        Self {
            data: PathBuf::from("balanced_data.csv"),
            model: PathBuf::from("attack_classifier_model.json"),
            label_encoder: PathBuf::from("label_encoder.json"),
            test_size: 0.3,
            seed: 42,
            n_trees: 100,
            pretty: true,
        }
    }
}

/// Prediction stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictSpec {
    pub model: PathBuf,
    /// Optional; predictions fall back to raw codes when it cannot be loaded
    pub label_encoder: PathBuf,
    pub input: PathBuf,
    /// Feature file whose last row is used when `input` is unusable
    pub fallback: Option<PathBuf>,
    pub output: PathBuf,
    #[serde(flatten)]
    pub align: AlignConfig,
}

impl Default for PredictSpec {
    fn default() -> Self {
        Self {
            model: PathBuf::from("attack_classifier_model.json"),
            label_encoder: PathBuf::from("label_encoder.json"),
            input: PathBuf::from("X_test.csv"),
            fallback: Some(PathBuf::from("feature_engineered_data.csv")),
            output: PathBuf::from("predictions.csv"),
            align: AlignConfig::default(),
        }
    }
}
