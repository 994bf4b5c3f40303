//! Confusion matrix for multi-class classification

use crate::error::{Error, Result};
use std::fmt;

/// Element [i][j] counts samples of true class i predicted as j
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    matrix: Vec<Vec<usize>>,
    n_classes: usize,
}

impl ConfusionMatrix {
    pub fn new(n_classes: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_classes]; n_classes],
            n_classes,
        }
    }

    /// Build from predictions and ground truth over a fixed class count, so
    /// classes missing from a small test split still get a row.
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<Self> {
        if y_pred.len() != y_true.len() {
            return Err(Error::ShapeMismatch {
                expected: y_true.len(),
                actual: y_pred.len(),
            });
        }
        if let Some(bad) = y_pred.iter().chain(y_true).find(|&&c| c >= n_classes) {
            return Err(Error::InvalidParameter(format!(
                "class index {bad} out of range for {n_classes} classes"
            )));
        }

        let mut cm = Self::new(n_classes);
        for (&pred, &truth) in y_pred.iter().zip(y_true) {
            cm.matrix[truth][pred] += 1;
        }
        Ok(cm)
    }

    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix[true_label][predicted_label]
    }

    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Predicted as `class` but was something else
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// Was `class` but predicted as something else
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// True instances of `class`
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.matrix {
            let cells: Vec<String> = row.iter().map(|c| format!("{c:>4}")).collect();
            writeln!(f, "[{} ]", cells.join(""))?;
        }
        Ok(())
    }
}
