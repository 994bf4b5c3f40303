//! Trained models and their companion artifacts

mod artifact;
mod classifier;
mod encoding;
mod forest;
mod metadata;


pub use artifact::ModelArtifact;
pub use classifier::Classifier;
pub use encoding::LabelEncoding;
pub use forest::{ForestClassifier, ForestParams};
pub use metadata::{fingerprint_file, ModelMetadata};
