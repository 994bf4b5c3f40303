//! Canonical feature vectors and numeric feature tables

use crate::error::{Error, Result};
use crate::schema::{CanonicalFeature, CANONICAL_COLUMNS};
use serde::{Deserialize, Serialize};

/// The four-field numeric contract shared by training and inference.
///
/// Values are always finite; missing inputs were replaced by zero before a
/// vector is built.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub session_duration: f64,
    pub command_count: f64,
    pub failed_logins: f64,
    pub common_commands_enc: f64,
}

impl FeatureVector {
    /// Number of canonical features
    pub const WIDTH: usize = 4;

    pub fn from_array(values: [f64; 4]) -> Self {
        let [session_duration, command_count, failed_logins, common_commands_enc] = values;
        Self {
            session_duration,
            command_count,
            failed_logins,
            common_commands_enc,
        }
    }

    /// Values in contract order.
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.session_duration,
            self.command_count,
            self.failed_logins,
            self.common_commands_enc,
        ]
    }

    pub fn get(&self, feature: CanonicalFeature) -> f64 {
        match feature {
            CanonicalFeature::SessionDuration => self.session_duration,
            CanonicalFeature::CommandCount => self.command_count,
            CanonicalFeature::FailedLogins => self.failed_logins,
            CanonicalFeature::CommonCommandsEnc => self.common_commands_enc,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

/// A feature vector paired with its class label
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledVector {
    pub features: FeatureVector,
    pub label: String,
}

impl LabeledVector {
    pub fn new(features: FeatureVector, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }
}

/// Named numeric columns, row-major.
///
/// This is what a classifier consumes. Column order matters: it must match the
/// order the model was trained on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(bad) = rows.iter().find(|r| r.len() != columns.len()) {
            return Err(Error::ShapeMismatch {
                expected: columns.len(),
                actual: bad.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Table with the canonical columns in contract order.
    pub fn from_vectors(vectors: &[FeatureVector]) -> Self {
        Self {
            columns: CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: vectors.iter().map(|v| v.to_array().to_vec()).collect(),
        }
    }

    /// Table with `n` rows and no columns, ready for `push_column`.
    pub fn with_rows(n: usize) -> Self {
        Self {
            columns: Vec::new(),
            rows: vec![Vec::new(); n],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Append a column; `values` must have one entry per row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::ShapeMismatch {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.columns.push(name.into());
        for (row, v) in self.rows.iter_mut().zip(values) {
            row.push(v);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order_matches_canonical_columns() {
        let v = FeatureVector::from_array([1.0, 2.0, 3.0, 4.0]);
        for (i, feature) in CanonicalFeature::ALL.into_iter().enumerate() {
            assert_eq!(v.get(feature), v.to_array()[i]);
            assert_eq!(feature.name(), CANONICAL_COLUMNS[i]);
        }
    }

    #[test]
    fn test_push_column_checks_length() {
        let mut table = FeatureTable::with_rows(2);
        table.push_column("x", vec![1.0, 2.0]).unwrap();
        assert!(table.push_column("y", vec![1.0]).is_err());
        assert_eq!(table.column("x"), Some(vec![1.0, 2.0]));
        assert_eq!(table.width(), 1);
    }

    #[test]
    fn test_from_vectors() {
        let table = FeatureTable::from_vectors(&[FeatureVector::default(); 3]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns(), &CANONICAL_COLUMNS.map(String::from));
    }
}
