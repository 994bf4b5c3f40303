//! Classifier interface consumed by the prediction path

use crate::error::Result;
use crate::features::FeatureTable;

/// A trained model that maps feature rows to class indices.
///
/// Only `predict` is mandatory. Models that cannot score confidence return
/// `None` from `predict_proba`; models that do not record their training
/// columns return `None` from `feature_names`, and callers must then pass
/// tables through unchanged.
pub trait Classifier {
    /// Class index per row.
    fn predict(&self, table: &FeatureTable) -> Result<Vec<usize>>;

    /// Class probabilities per row, one entry per class index.
    fn predict_proba(&self, _table: &FeatureTable) -> Option<Result<Vec<Vec<f64>>>> {
        None
    }

    /// Input columns in the order the model was trained on.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }
}
