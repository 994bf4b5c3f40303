//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid test size: {0} (must be in (0.0, 1.0))")]
    InvalidTestSize(f64),

    #[error("Invalid tree count: {0} (must be > 0)")]
    InvalidTrees(u16),

    #[error("Invalid neighbour count: {0} (must be > 0)")]
    InvalidNeighbors(usize),

    #[error("Invalid interpolation support: {support} (must exceed k_neighbors = {k})")]
    InvalidInterpolationSupport { support: usize, k: usize },

    #[error("Invalid sample rows: {0} (must be > 0)")]
    InvalidSampleRows(usize),

    #[error("Invalid token length: {0} (must be > 0)")]
    InvalidTokenLength(usize),

    #[error("Label candidates and label tokens cannot both be empty")]
    EmptyLabelCandidates,

    #[error("Aggregation group keys cannot be empty")]
    EmptyGroupKeys,

    #[error("Prediction identifier columns cannot be empty")]
    EmptyIdentifierColumns,

    #[error("{stage} input and output are the same file: {path}")]
    SameInputOutput { stage: &'static str, path: String },
}
