//! Feature normalization
//!
//! - [`normalize`]: project any record set onto the four canonical features
//! - [`aggregate`]: collapse raw honeypot events into per-session feature rows

pub mod aggregate;
mod normalize;
mod vector;


pub use aggregate::{
    aggregate_sessions, sessions_to_records, AggregateConfig, LabelPolicy, SessionSummary,
    SESSION_COLUMNS,
};
pub use normalize::{categorical_proxy, labeled_vectors, normalize};
pub use vector::{FeatureTable, FeatureVector, LabeledVector};
