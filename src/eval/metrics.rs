//! Per-class precision, recall and F1

use super::confusion::ConfusionMatrix;

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Average {
    /// Unweighted mean over classes
    Macro,
    /// Mean weighted by support
    Weighted,
}

/// Multi-class classification metrics
#[derive(Clone, Debug, PartialEq)]
pub struct MultiClassMetrics {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub f1: Vec<f64>,
    pub support: Vec<usize>,
}

impl MultiClassMetrics {
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n = cm.n_classes();
        let mut metrics = Self {
            precision: Vec::with_capacity(n),
            recall: Vec::with_capacity(n),
            f1: Vec::with_capacity(n),
            support: Vec::with_capacity(n),
        };

        for class in 0..n {
            let tp = cm.true_positives(class) as f64;
            let fp = cm.false_positives(class) as f64;
            let fn_ = cm.false_negatives(class) as f64;

            let p = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
            let r = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
            let f = if p + r > 0.0 {
                2.0 * p * r / (p + r)
            } else {
                0.0
            };

            metrics.precision.push(p);
            metrics.recall.push(r);
            metrics.f1.push(f);
            metrics.support.push(cm.support(class));
        }
        metrics
    }

    pub fn n_classes(&self) -> usize {
        self.support.len()
    }

    pub fn precision_avg(&self, average: Average) -> f64 {
        self.average(&self.precision, average)
    }

    pub fn recall_avg(&self, average: Average) -> f64 {
        self.average(&self.recall, average)
    }

    pub fn f1_avg(&self, average: Average) -> f64 {
        self.average(&self.f1, average)
    }

    fn average(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Macro => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            Average::Weighted => {
                let total: usize = self.support.iter().sum();
                if total == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(&self.support)
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total as f64
            }
        }
    }
}
