//! Feature preparation and schema alignment for inference

use super::AlignConfig;
use crate::data::{coerce_column, fill_missing, is_wholly_missing, length_proxy, RecordSet};
use crate::error::Result;
use crate::features::{normalize, FeatureTable};
use crate::schema::{ResolverConfig, SchemaResolver, CANONICAL_COLUMNS};
use std::collections::HashSet;

/// Numeric values for an arbitrary column: coerced with missing as 0, or the
/// length proxy when nothing in it is numeric.
pub fn coerce_or_proxy<S: AsRef<str>>(values: &[S]) -> Vec<f64> {
    let coerced = coerce_column(values);
    if is_wholly_missing(&coerced) {
        length_proxy(values)
    } else {
        fill_missing(&coerced, 0.0)
    }
}

/// Turn unlabeled records into a numeric feature table.
///
/// The four canonical columns come first, derived exactly as for training.
/// Every other column is appended in input order, except columns that fed a
/// canonical feature, identifier columns and label-like columns. A column is
/// label-like when its name is a label candidate or when the resolver would
/// pick it as the label by its values.
pub fn prepare_features(
    records: &RecordSet,
    resolver: &ResolverConfig,
    config: &AlignConfig,
) -> Result<FeatureTable> {
    let schema = SchemaResolver::new(resolver.clone());
    let mapping = schema.resolve_features(records);
    let label = schema.resolve_label(records).ok();
    let mut table = FeatureTable::from_vectors(&normalize(records, &mapping));

    let mut consumed: HashSet<&str> = CANONICAL_COLUMNS.into_iter().collect();
    consumed.extend(mapping.columns.iter().map(|(_, c)| c.name.as_str()));
    consumed.extend(mapping.categorical.as_deref());
    consumed.extend(resolver.label_candidates.iter().map(String::as_str));
    consumed.extend(label.as_ref().map(|c| c.name.as_str()));
    consumed.extend(config.identifier_columns.iter().map(String::as_str));

    for (i, name) in records.columns().iter().enumerate() {
        if consumed.insert(name.as_str()) {
            table.push_column(name.clone(), coerce_or_proxy(&records.column_at(i)))?;
        }
    }
    Ok(table)
}

/// Reorder and pad `table` to the model's declared input columns.
///
/// Missing columns become all-zero, extra columns are dropped. Without a
/// declared list the table passes through unchanged.
pub fn align_to_model(table: FeatureTable, expected: Option<&[String]>) -> Result<FeatureTable> {
    let Some(expected) = expected else {
        return Ok(table);
    };

    let mut aligned = FeatureTable::with_rows(table.len());
    for name in expected {
        let values = table
            .column(name)
            .unwrap_or_else(|| vec![0.0; table.len()]);
        aligned.push_column(name.clone(), values)?;
    }
    Ok(aligned)
}
