//! Model evaluation
//!
//! - `confusion`: confusion matrix over a fixed class count
//! - `metrics`: per-class precision, recall, F1 with macro/weighted averages
//! - `report`: precision/recall/F1 text report with class names
//! - `split`: seeded train/test split

mod confusion;
mod metrics;
mod report;
mod split;


pub use confusion::ConfusionMatrix;
pub use metrics::{Average, MultiClassMetrics};
pub use report::EvaluationReport;
pub use split::train_test_split;
