//! Predict command implementation

use crate::align::{align_to_model, load_inference_input, prepare_features, InputSource};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PipelineSpec;
use crate::data::RecordSet;
use crate::io::write_records;
use crate::model::{Classifier, LabelEncoding, ModelArtifact};

/// Columns appended to the input rows in the predictions file
const PREDICTION_COLUMNS: [&str; 3] = ["pred_label_enc", "pred_label", "pred_proba_max"];

pub fn run_predict(spec: &PipelineSpec, level: LogLevel) -> Result<(), String> {
    let section = &spec.predict;

    let model = ModelArtifact::load(&section.model).map_err(|e| {
        format!("Failed to load model {}: {e}", section.model.display())
    })?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Loaded {} ({}), trained {}",
            model.metadata.name, model.metadata.architecture, model.metadata.created_at
        ),
    );

    let encoding = match LabelEncoding::load(&section.label_encoder) {
        Ok(encoding) => Some(encoding),
        Err(e) => {
            log(
                level,
                LogLevel::Normal,
                &format!("Label encoding unavailable ({e}); reporting raw codes"),
            );
            None
        }
    };

    let input = load_inference_input(&section.input, section.fallback.as_deref(), &section.align)
        .map_err(|e| format!("Input error: {e}"))?;
    if input.source == InputSource::Fallback {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "{} unusable; predicting on the last row of the fallback feature file",
                section.input.display()
            ),
        );
    }

    let table = prepare_features(&input.records, &spec.schema, &section.align)
        .map_err(|e| format!("Feature preparation failed: {e}"))?;
    match model.feature_names() {
        Some(names) => log(
            level,
            LogLevel::Verbose,
            &format!("  Aligning {:?} to {:?}", table.columns(), names),
        ),
        None => log(
            level,
            LogLevel::Verbose,
            "  Model declares no feature names; passing columns through",
        ),
    }
    let table = align_to_model(table, model.feature_names())
        .map_err(|e| format!("Feature alignment failed: {e}"))?;

    let predicted = model
        .predict(&table)
        .map_err(|e| format!("Prediction failed: {e}"))?;
    let confidence = match model.predict_proba(&table) {
        Some(Ok(proba)) => Some(proba),
        Some(Err(e)) => {
            log(
                level,
                LogLevel::Normal,
                &format!("Probability scoring failed ({e}); leaving pred_proba_max empty"),
            );
            None
        }
        None => None,
    };

    let output = with_predictions(
        input.records,
        &predicted,
        confidence.as_deref(),
        encoding.as_ref(),
    )?;
    write_records(&section.output, &output).map_err(|e| format!("Write failed: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Saved {} predictions to {}",
            predicted.len(),
            section.output.display()
        ),
    );
    if level == LogLevel::Verbose {
        for row in output.rows() {
            log(level, LogLevel::Verbose, &format!("  {}", row.join(",")));
        }
    }

    Ok(())
}

/// Append encoded prediction, decoded label and top probability to `records`.
///
/// Without an encoding the decoded label is the raw code; without
/// probabilities the confidence column is blank.
fn with_predictions(
    mut records: RecordSet,
    predicted: &[usize],
    proba: Option<&[Vec<f64>]>,
    encoding: Option<&LabelEncoding>,
) -> Result<RecordSet, String> {
    let codes: Vec<String> = predicted.iter().map(ToString::to_string).collect();
    let labels: Vec<String> = predicted
        .iter()
        .map(|&code| {
            encoding
                .and_then(|enc| enc.decode(code))
                .map_or_else(|| code.to_string(), str::to_string)
        })
        .collect();
    let confidence: Vec<String> = match proba {
        Some(proba) => proba
            .iter()
            .map(|p| {
                p.iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max)
                    .to_string()
            })
            .collect(),
        None => vec![String::new(); predicted.len()],
    };

    for (name, values) in PREDICTION_COLUMNS.into_iter().zip([codes, labels, confidence]) {
        records
            .push_column(name, values)
            .map_err(|e| format!("Prediction output failed: {e}"))?;
    }
    Ok(records)
}
