//! File I/O: balanced datasets and model artifacts
//!
//! Every writer replaces its target atomically, so a failed run never leaves
//! a half-written file behind.

mod atomic;
mod dataset;
mod format;
mod load;
mod save;


pub use atomic::write_atomic;
pub use dataset::{
    read_training_set, write_balanced_dataset, write_records, TrainingSet, LABEL_COLUMN,
};
pub use format::{ModelFormat, SaveConfig};
pub use load::load_artifact;
pub use save::save_artifact;
