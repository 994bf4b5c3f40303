//! Inference-time feature alignment
//!
//! A classifier is order-sensitive over its input columns. This module
//! rebuilds the training feature contract from unlabeled records and then
//! forces the column set and order to match what the model declares.

mod input;
mod prepare;


pub use input::{load_inference_input, InferenceInput, InputSource};
pub use prepare::{align_to_model, coerce_or_proxy, prepare_features};

use serde::{Deserialize, Serialize};

/// Inference column roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Columns passed through untouched and never used as features
    pub identifier_columns: Vec<String>,
    /// Columns kept from the fallback feature row
    pub fallback_columns: Vec<String>,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            identifier_columns: ["src_ip", "ip", "source_ip"].map(String::from).to_vec(),
            fallback_columns: [
                "session_duration",
                "command_count",
                "failed_logins",
                "common_commands",
                "src_ip",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}
