//! Artifact serialization formats

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text formats for model and label-encoding artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFormat {
    Json,
    Yaml,
}

impl ModelFormat {
    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect format from `path`'s extension; the error names the path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Serialization("File has no extension".to_string()))?;
        Self::from_extension(ext).ok_or_else(|| {
            Error::Serialization(format!(
                "Unsupported file extension: {ext} ({})",
                path.display()
            ))
        })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// How an artifact is written
#[derive(Debug, Clone)]
pub struct SaveConfig {
    pub format: ModelFormat,
    /// Pretty-print JSON
    pub pretty: bool,
}

impl SaveConfig {
    pub fn new(format: ModelFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self::new(ModelFormat::Json).with_pretty(true)
    }
}
