//! Configuration for column discovery

use serde::{Deserialize, Serialize};

/// Configuration for the schema resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Label column names, most preferred first
    pub label_candidates: Vec<String>,
    /// Lower-cased values that mark a column as holding labels
    pub label_tokens: Vec<String>,
    /// Rows sampled per column when sniffing for label tokens (default: 20)
    pub sample_rows: usize,
    /// Categorical command fields, most preferred first, for the length proxy
    pub categorical_fields: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            label_candidates: ["attack_type", "attack", "label", "type"]
                .map(String::from)
                .to_vec(),
            label_tokens: [
                "brute force",
                "command injection",
                "other",
                "bruteforce",
                "command",
            ]
            .map(String::from)
            .to_vec(),
            sample_rows: 20,
            categorical_fields: ["common_commands", "command"].map(String::from).to_vec(),
        }
    }
}
