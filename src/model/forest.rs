//! Random forest classifier backed by smartcore

use super::classifier::Classifier;
use crate::error::{Error, Result};
use crate::features::FeatureTable;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

type Forest = RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;

/// Forest hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_trees: u16,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
        }
    }
}

/// Trained random forest over a fixed feature width
#[derive(Debug, Serialize, Deserialize)]
pub struct ForestClassifier {
    n_features: usize,
    forest: Forest,
}

fn to_matrix(table: &FeatureTable) -> Result<DenseMatrix<f64>> {
    let flat: Vec<f64> = table.rows().iter().flatten().copied().collect();
    Ok(DenseMatrix::new(table.len(), table.width(), flat, false)?)
}

impl ForestClassifier {
    /// Fit on `table` with class indices `targets` in `0..n_classes`.
    pub fn fit(
        table: &FeatureTable,
        targets: &[usize],
        n_classes: usize,
        params: ForestParams,
    ) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyDataset("no training rows".to_string()));
        }
        if targets.len() != table.len() {
            return Err(Error::ShapeMismatch {
                expected: table.len(),
                actual: targets.len(),
            });
        }
        if let Some(&bad) = targets.iter().find(|&&t| t >= n_classes) {
            return Err(Error::InvalidParameter(format!(
                "class index {bad} out of range for {n_classes} classes"
            )));
        }
        if params.n_trees == 0 {
            return Err(Error::InvalidParameter("n_trees must be at least 1".to_string()));
        }

        let y = targets
            .iter()
            .map(|&t| {
                u32::try_from(t).map_err(|_| {
                    Error::InvalidParameter(format!("class index {t} does not fit in u32"))
                })
            })
            .collect::<Result<Vec<u32>>>()?;
        let parameters = RandomForestClassifierParameters {
            n_trees: params.n_trees,
            seed: params.seed,
            ..RandomForestClassifierParameters::default()
        };
        let forest = Forest::fit(&to_matrix(table)?, &y, parameters)?;

        Ok(Self {
            n_features: table.width(),
            forest,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

impl Classifier for ForestClassifier {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<usize>> {
        if table.width() != self.n_features {
            return Err(Error::ShapeMismatch {
                expected: self.n_features,
                actual: table.width(),
            });
        }
        if table.is_empty() {
            return Ok(Vec::new());
        }
        let predicted = self.forest.predict(&to_matrix(table)?)?;
        Ok(predicted.into_iter().map(|c| c as usize).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<f64>>) -> FeatureTable {
        FeatureTable::new(vec!["a".to_string(), "b".to_string()], rows).unwrap()
    }

    fn separated() -> (FeatureTable, Vec<usize>) {
        let rows = vec![
            vec![0.0, 0.1],
            vec![0.2, 0.0],
            vec![0.1, 0.3],
            vec![0.3, 0.2],
            vec![9.0, 9.5],
            vec![9.4, 9.1],
            vec![8.8, 9.9],
            vec![9.9, 8.7],
        ];
        (table(rows), vec![0, 0, 0, 0, 1, 1, 1, 1])
    }

    #[test]
    fn test_fit_predict_separated() {
        let (train, targets) = separated();
        let model = ForestClassifier::fit(&train, &targets, 2, ForestParams::default()).unwrap();
        let preds = model
            .predict(&table(vec![vec![0.15, 0.2], vec![9.2, 9.3]]))
            .unwrap();
        assert_eq!(preds, vec![0, 1]);
        assert_eq!(model.n_features(), 2);
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let (train, targets) = separated();
        let params = ForestParams { n_trees: 15, seed: 7 };
        let first = ForestClassifier::fit(&train, &targets, 2, params).unwrap();
        let second = ForestClassifier::fit(&train, &targets, 2, params).unwrap();
        let grid = table((0..10).map(|i| vec![i as f64, 10.0 - i as f64]).collect());
        assert_eq!(first.predict(&grid).unwrap(), second.predict(&grid).unwrap());
    }

    #[test]
    fn test_no_probabilities() {
        let (train, targets) = separated();
        let model = ForestClassifier::fit(&train, &targets, 2, ForestParams::default()).unwrap();
        assert!(model.predict_proba(&train).is_none());
        assert!(model.feature_names().is_none());
    }

    #[test]
    fn test_width_mismatch() {
        let (train, targets) = separated();
        let model = ForestClassifier::fit(&train, &targets, 2, ForestParams::default()).unwrap();
        let narrow = FeatureTable::new(vec!["a".to_string()], vec![vec![1.0]]).unwrap();
        assert!(matches!(
            model.predict(&narrow),
            Err(Error::ShapeMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_fit_validates_inputs() {
        let train = table(vec![vec![0.0, 0.0]]);
        let params = ForestParams::default();
        assert!(ForestClassifier::fit(&train, &[3], 2, params).is_err());
        assert!(ForestClassifier::fit(&train, &[0, 1], 2, params).is_err());
        assert!(ForestClassifier::fit(&FeatureTable::default(), &[], 1, params).is_err());
        let no_trees = ForestParams { n_trees: 0, seed: 1 };
        assert!(ForestClassifier::fit(&train, &[0], 1, no_trees).is_err());
    }
}
