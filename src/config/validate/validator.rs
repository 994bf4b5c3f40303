//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::PipelineSpec;
use std::path::Path;

/// Validate a pipeline specification
///
/// Checks numeric ranges and non-empty lookup lists. Input files are not
/// required to exist yet; earlier stages may produce them.
pub fn validate_config(spec: &PipelineSpec) -> Result<(), ValidationError> {
    let schema = &spec.schema;
    if schema.label_candidates.is_empty() && schema.label_tokens.is_empty() {
        return Err(ValidationError::EmptyLabelCandidates);
    }
    if schema.sample_rows == 0 {
        return Err(ValidationError::InvalidSampleRows(schema.sample_rows));
    }

    let aggregate = &spec.aggregate.settings;
    if aggregate.group_keys.is_empty() {
        return Err(ValidationError::EmptyGroupKeys);
    }
    if aggregate.max_token_len == 0 {
        return Err(ValidationError::InvalidTokenLength(aggregate.max_token_len));
    }

    let balance = &spec.balance.settings;
    if balance.k_neighbors == 0 {
        return Err(ValidationError::InvalidNeighbors(balance.k_neighbors));
    }
    if balance.min_interpolation_support <= balance.k_neighbors {
        return Err(ValidationError::InvalidInterpolationSupport {
            support: balance.min_interpolation_support,
            k: balance.k_neighbors,
        });
    }

    // NaN fails both comparisons
    if !(spec.train.test_size > 0.0 && spec.train.test_size < 1.0) {
        return Err(ValidationError::InvalidTestSize(spec.train.test_size));
    }
    if spec.train.n_trees == 0 {
        return Err(ValidationError::InvalidTrees(spec.train.n_trees));
    }

    if spec.predict.align.identifier_columns.is_empty() {
        return Err(ValidationError::EmptyIdentifierColumns);
    }

    distinct("balance", &spec.balance.input, &spec.balance.output)?;
    distinct("predict", &spec.predict.input, &spec.predict.output)?;

    Ok(())
}

fn distinct(stage: &'static str, input: &Path, output: &Path) -> Result<(), ValidationError> {
    if input == output {
        return Err(ValidationError::SameInputOutput {
            stage,
            path: input.display().to_string(),
        });
    }
    Ok(())
}
