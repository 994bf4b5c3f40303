//! Tabular dataset files

use super::atomic::write_atomic;
use crate::data::{coerce_column, fill_missing, read_records, RecordSet};
use crate::error::{Error, Result};
use crate::features::{FeatureTable, LabeledVector};
use crate::schema::CANONICAL_COLUMNS;
use std::path::Path;

/// Name of the label column in a balanced dataset
pub const LABEL_COLUMN: &str = "label";

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))
}

/// Write a balanced dataset: the four canonical columns followed by `label`.
///
/// Any existing file is replaced. Identical input gives identical bytes.
pub fn write_balanced_dataset(path: impl AsRef<Path>, records: &[LabeledVector]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CANONICAL_COLUMNS.iter().copied().chain([LABEL_COLUMN]))?;
    for r in records {
        let mut row: Vec<String> = r.features.to_array().iter().map(f64::to_string).collect();
        row.push(r.label.clone());
        writer.write_record(&row)?;
    }
    write_atomic(path, &finish(writer)?)
}

/// Write a record set with its header.
pub fn write_records(path: impl AsRef<Path>, records: &RecordSet) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(records.columns())?;
    for row in records.rows() {
        writer.write_record(row)?;
    }
    write_atomic(path, &finish(writer)?)
}

/// Feature matrix and labels read from a balanced dataset
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub features: FeatureTable,
    pub labels: Vec<String>,
}

impl TrainingSet {
    /// Split a record set into the label column and every other column as a
    /// numeric feature, missing values as 0.
    pub fn from_records(records: &RecordSet, label_column: &str) -> Result<Self> {
        let labels: Vec<String> = records
            .column(label_column)
            .ok_or_else(|| Error::NoLabelColumn {
                columns: records.columns().to_vec(),
            })?
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut features = FeatureTable::with_rows(records.len());
        for (i, name) in records.columns().iter().enumerate() {
            if name != label_column {
                let values = fill_missing(&coerce_column(&records.column_at(i)), 0.0);
                features.push_column(name.clone(), values)?;
            }
        }
        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Read a balanced dataset for training.
pub fn read_training_set(path: impl AsRef<Path>) -> Result<TrainingSet> {
    let records = read_records(path)?;
    TrainingSet::from_records(&records, LABEL_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;
    use tempfile::TempDir;

    fn sample() -> Vec<LabeledVector> {
        vec![
            LabeledVector::new(FeatureVector::from_array([50.0, 3.0, 2.0, 4.0]), "Brute Force"),
            LabeledVector::new(FeatureVector::from_array([0.5, 0.0, 0.0, 0.0]), "Other, misc"),
        ]
    }

    #[test]
    fn test_balanced_dataset_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("balanced.csv");
        write_balanced_dataset(&path, &sample()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("session_duration,command_count,failed_logins,common_commands_enc,label")
        );
        assert_eq!(lines.next(), Some("50,3,2,4,Brute Force"));
        assert_eq!(lines.next(), Some("0.5,0,0,0,\"Other, misc\""));
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("balanced.csv");

        write_balanced_dataset(&path, &sample()).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_balanced_dataset(&path, &sample()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_read_training_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("balanced.csv");
        write_balanced_dataset(&path, &sample()).unwrap();

        let set = read_training_set(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.labels[1], "Other, misc");
        assert_eq!(set.features.columns(), &CANONICAL_COLUMNS.map(String::from));
        assert_eq!(set.features.rows()[0], vec![50.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_training_set_requires_label() {
        let records = RecordSet::with_columns(["a", "b"]);
        assert!(matches!(
            TrainingSet::from_records(&records, LABEL_COLUMN),
            Err(Error::NoLabelColumn { .. })
        ));
    }
}
