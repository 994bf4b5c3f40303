//! Inference input selection

use super::AlignConfig;
use crate::data::{read_records, RecordSet};
use crate::error::{Error, Result};
use std::path::Path;

/// Where the inference records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// The requested input file
    Primary,
    /// Last row of the fallback feature file
    Fallback,
}

/// Records selected for inference
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceInput {
    pub records: RecordSet,
    pub source: InputSource,
}

fn has_identifier(records: &RecordSet, config: &AlignConfig) -> bool {
    config.identifier_columns.iter().any(|c| {
        records
            .column(c)
            .is_some_and(|values| values.iter().any(|v| !v.trim().is_empty()))
    })
}

/// Read `input`, or fall back to the last row of `fallback`.
///
/// The input is used when it exists and has at least one non-empty identifier
/// value. Otherwise the newest row of the fallback feature file is projected
/// onto `config.fallback_columns`, with a blank first identifier column added
/// when the file has none.
pub fn load_inference_input(
    input: &Path,
    fallback: Option<&Path>,
    config: &AlignConfig,
) -> Result<InferenceInput> {
    if input.exists() {
        let records = read_records(input)?;
        if has_identifier(&records, config) {
            return Ok(InferenceInput {
                records,
                source: InputSource::Primary,
            });
        }
    }

    if let Some(fallback) = fallback.filter(|p| p.exists()) {
        let features = read_records(fallback)?;
        if !features.is_empty() {
            let wanted: Vec<&str> = config.fallback_columns.iter().map(String::as_str).collect();
            let mut records = features.tail(1).project(&wanted);
            if let Some(id) = config.identifier_columns.first() {
                if !records.has_column(id) {
                    records.add_column(id.clone(), "");
                }
            }
            return Ok(InferenceInput {
                records,
                source: InputSource::Fallback,
            });
        }
    }

    Err(Error::ingest(
        input,
        "no usable input and no fallback feature file available",
    ))
}
