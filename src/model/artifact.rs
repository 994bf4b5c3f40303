//! Persisted model artifact

use super::classifier::Classifier;
use super::forest::ForestClassifier;
use super::metadata::ModelMetadata;
use crate::error::Result;
use crate::features::FeatureTable;
use crate::io::{load_artifact, save_artifact, SaveConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trained classifier plus provenance, as written by `train` and read by
/// `predict`. Readers never modify it.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ModelMetadata,
    /// Training column order; absent in artifacts that never recorded it
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub classifier: ForestClassifier,
}

impl ModelArtifact {
    pub fn new(
        metadata: ModelMetadata,
        feature_names: Option<Vec<String>>,
        classifier: ForestClassifier,
    ) -> Self {
        Self {
            metadata,
            feature_names,
            classifier,
        }
    }

    pub fn save(&self, path: impl AsRef<Path>, config: &SaveConfig) -> Result<()> {
        save_artifact(self, path, config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_artifact(path)
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<usize>> {
        self.classifier.predict(table)
    }

    fn predict_proba(&self, table: &FeatureTable) -> Option<Result<Vec<Vec<f64>>>> {
        self.classifier.predict_proba(table)
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
