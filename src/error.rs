//! Error types for honeyset

use std::path::PathBuf;

/// Result type alias for honeyset operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the dataset pipeline and the inference path
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input file is absent or cannot be parsed into a record set.
    #[error("Cannot read {path}: {message}")]
    Ingest { path: PathBuf, message: String },

    /// Neither name matching nor content sniffing found a label column.
    #[error(
        "No label column found among {columns:?}\n  → Supply a dataset with an 'attack_type' or 'label' column"
    )]
    NoLabelColumn { columns: Vec<String> },

    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),

    #[error("Shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Model error: {0}")]
    Model(#[from] smartcore::error::Failed),
}

impl Error {
    /// Build an ingestion error for `path`.
    pub fn ingest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Ingest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether a balancing run may report this error and stop cleanly without
    /// writing output. Only a missing label column qualifies.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoLabelColumn { .. })
    }
}
