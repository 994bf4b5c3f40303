//! Projection of record sets onto the canonical feature contract

use super::vector::{FeatureVector, LabeledVector};
use crate::data::{coerce_column, fill_missing, length_proxy, RecordSet};
use crate::schema::{CanonicalFeature, FeatureMapping, ResolvedSchema};

/// Numeric values of one canonical feature, zeros when it has no source.
fn feature_values(records: &RecordSet, mapping: &FeatureMapping, feature: CanonicalFeature) -> Vec<f64> {
    let source = match feature {
        CanonicalFeature::CommonCommandsEnc => {
            return categorical_proxy(records, mapping.categorical.as_deref());
        }
        other => mapping.get(other).and_then(|c| records.column(&c.name)),
    };
    match source {
        Some(values) => fill_missing(&coerce_column(&values), 0.0),
        None => vec![0.0; records.len()],
    }
}

/// Character length of the categorical field, or zeros when there is none.
pub fn categorical_proxy(records: &RecordSet, field: Option<&str>) -> Vec<f64> {
    match field.and_then(|f| records.column(f)) {
        Some(values) => length_proxy(&values),
        None => vec![0.0; records.len()],
    }
}

/// Build one canonical vector per record. The input is left untouched.
pub fn normalize(records: &RecordSet, mapping: &FeatureMapping) -> Vec<FeatureVector> {
    let columns = CanonicalFeature::ALL.map(|f| feature_values(records, mapping, f));
    (0..records.len())
        .map(|i| {
            FeatureVector::from_array([
                columns[0][i],
                columns[1][i],
                columns[2][i],
                columns[3][i],
            ])
        })
        .collect()
}

/// Normalize features and attach the label of each record.
pub fn labeled_vectors(records: &RecordSet, schema: &ResolvedSchema) -> Vec<LabeledVector> {
    let labels = records.column(&schema.label.name).unwrap_or_default();
    normalize(records, &schema.features)
        .into_iter()
        .zip(labels)
        .map(|(features, label)| LabeledVector::new(features, label))
        .collect()
}
