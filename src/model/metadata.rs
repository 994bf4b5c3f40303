//! Model provenance

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;

/// Metadata stored next to a trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub name: String,

    /// Classifier family (e.g., "random_forest")
    pub architecture: String,

    /// Crate version that produced the artifact
    pub version: String,

    pub created_at: DateTime<Utc>,

    /// SHA-256 of the training file, hex-encoded
    #[serde(default)]
    pub training_data_sha256: Option<String>,

    /// Rows the model was fitted on
    #[serde(default)]
    pub n_samples: usize,

    /// Custom metadata fields
    #[serde(default)]
    pub custom: HashMap<String, serde_json::Value>,
}

impl ModelMetadata {
    pub fn new(name: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            architecture: architecture.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            training_data_sha256: None,
            n_samples: 0,
            custom: HashMap::new(),
        }
    }

    pub fn with_training_data(mut self, sha256: impl Into<String>, n_samples: usize) -> Self {
        self.training_data_sha256 = Some(sha256.into());
        self.n_samples = n_samples;
        self
    }

    /// Add custom metadata field
    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }
}

/// Hex SHA-256 of a file's contents.
pub fn fingerprint_file(path: impl AsRef<Path>) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
