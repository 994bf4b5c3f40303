//! Label encoding artifact

use crate::error::{Error, Result};
use crate::io::{load_artifact, save_artifact, SaveConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bijection between label strings and class indices.
///
/// Classes are the sorted unique labels seen at fit time, so the same label
/// set always yields the same indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoding {
    classes: Vec<String>,
}

impl LabelEncoding {
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes: Vec<String> = labels
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes.binary_search_by(|c| c.as_str().cmp(label)).ok()
    }

    /// Encode every label; an unseen label is an error.
    pub fn encode_all<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|l| {
                let label = l.as_ref();
                self.encode(label).ok_or_else(|| {
                    Error::InvalidParameter(format!("label '{label}' was not seen at fit time"))
                })
            })
            .collect()
    }

    pub fn decode(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    pub fn save(&self, path: impl AsRef<Path>, config: &SaveConfig) -> Result<()> {
        save_artifact(self, path, config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let encoding: Self = load_artifact(path)?;
        let mut sorted = encoding.classes.clone();
        sorted.sort();
        sorted.dedup();
        if sorted != encoding.classes {
            return Err(Error::Serialization(
                "label encoding classes must be sorted and unique".to_string(),
            ));
        }
        Ok(encoding)
    }
}
