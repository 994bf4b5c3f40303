//! Held-out evaluation report

use super::confusion::ConfusionMatrix;
use super::metrics::{Average, MultiClassMetrics};
use crate::error::Result;
use std::fmt;

/// Accuracy, per-class metrics and confusion matrix on a test split
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationReport {
    pub class_names: Vec<String>,
    pub confusion: ConfusionMatrix,
    pub metrics: MultiClassMetrics,
}

impl EvaluationReport {
    /// Evaluate predictions against ground truth; one name per class index.
    pub fn new(y_pred: &[usize], y_true: &[usize], class_names: Vec<String>) -> Result<Self> {
        let confusion = ConfusionMatrix::from_predictions(y_pred, y_true, class_names.len())?;
        let metrics = MultiClassMetrics::from_confusion_matrix(&confusion);
        Ok(Self {
            class_names,
            confusion,
            metrics,
        })
    }

    pub fn accuracy(&self) -> f64 {
        self.confusion.accuracy()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .class_names
            .iter()
            .map(|n| n.chars().count())
            .chain(["weighted avg".len()])
            .max()
            .unwrap_or(0);
        let m = &self.metrics;

        writeln!(
            f,
            "{:>width$} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (class, name) in self.class_names.iter().enumerate() {
            writeln!(
                f,
                "{:>width$} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, m.precision[class], m.recall[class], m.f1[class], m.support[class]
            )?;
        }
        writeln!(f)?;

        let total: usize = m.support.iter().sum();
        writeln!(
            f,
            "{:>width$} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy",
            "",
            "",
            self.accuracy(),
            total
        )?;
        for (label, avg) in [("macro avg", Average::Macro), ("weighted avg", Average::Weighted)] {
            writeln!(
                f,
                "{:>width$} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                label,
                m.precision_avg(avg),
                m.recall_avg(avg),
                m.f1_avg(avg),
                total
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Confusion Matrix:")?;
        write!(f, "{}", self.confusion)
    }
}
