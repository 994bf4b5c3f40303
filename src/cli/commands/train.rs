//! Train command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{PipelineSpec, TrainSection};
use crate::eval::{train_test_split, EvaluationReport};
use crate::features::FeatureTable;
use crate::io::{read_training_set, ModelFormat, SaveConfig};
use crate::model::{
    fingerprint_file, Classifier, ForestClassifier, ForestParams, LabelEncoding, ModelArtifact,
    ModelMetadata,
};
use std::path::Path;

pub fn run_train(spec: &PipelineSpec, level: LogLevel) -> Result<(), String> {
    let section = &spec.train;
    let model_config = save_config(&section.model, section.pretty)?;
    let encoding_config = save_config(&section.label_encoder, section.pretty)?;
    log(
        level,
        LogLevel::Normal,
        &format!("Loading dataset: {}", section.data.display()),
    );

    let set = read_training_set(&section.data).map_err(|e| format!("Ingest error: {e}"))?;
    let encoding = LabelEncoding::fit(&set.labels);
    let targets = encoding
        .encode_all(&set.labels)
        .map_err(|e| format!("Label encoding failed: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "  {} rows, {} features, {} classes",
            set.len(),
            set.features.width(),
            encoding.len()
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Classes: {:?}", encoding.classes()),
    );

    let (train_idx, test_idx) = train_test_split(set.len(), section.test_size, section.seed)
        .map_err(|e| format!("Split failed: {e}"))?;
    let x_train = select_rows(&set.features, &train_idx)?;
    let x_test = select_rows(&set.features, &test_idx)?;
    let y_train: Vec<usize> = train_idx.iter().map(|&i| targets[i]).collect();
    let y_test: Vec<usize> = test_idx.iter().map(|&i| targets[i]).collect();

    let params = ForestParams {
        n_trees: section.n_trees,
        seed: section.seed,
    };
    let classifier = ForestClassifier::fit(&x_train, &y_train, encoding.len(), params)
        .map_err(|e| format!("Training failed: {e}"))?;

    let y_pred = classifier
        .predict(&x_test)
        .map_err(|e| format!("Evaluation failed: {e}"))?;
    let report = EvaluationReport::new(&y_pred, &y_test, encoding.classes().to_vec())
        .map_err(|e| format!("Evaluation failed: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!("Accuracy: {:.4}", report.accuracy()),
    );
    log(level, LogLevel::Normal, &report.to_string());

    save_outputs(
        section,
        (&model_config, &encoding_config),
        &set.features,
        classifier,
        &encoding,
        report.accuracy(),
    )?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Saved model to {} and label encoding to {}",
            section.model.display(),
            section.label_encoder.display()
        ),
    );

    Ok(())
}

fn save_outputs(
    section: &TrainSection,
    (model_config, encoding_config): (&SaveConfig, &SaveConfig),
    features: &FeatureTable,
    classifier: ForestClassifier,
    encoding: &LabelEncoding,
    accuracy: f64,
) -> Result<(), String> {
    let fingerprint =
        fingerprint_file(&section.data).map_err(|e| format!("Fingerprint failed: {e}"))?;
    let metadata = ModelMetadata::new("attack_classifier", "random_forest")
        .with_training_data(fingerprint, features.len())
        .with_custom("test_accuracy", serde_json::json!(accuracy))
        .with_custom("test_size", serde_json::json!(section.test_size))
        .with_custom("seed", serde_json::json!(section.seed))
        .with_custom("n_trees", serde_json::json!(section.n_trees));

    ModelArtifact::new(metadata, Some(features.columns().to_vec()), classifier)
        .save(&section.model, model_config)
        .map_err(|e| format!("Failed to save model: {e}"))?;
    encoding
        .save(&section.label_encoder, encoding_config)
        .map_err(|e| format!("Failed to save label encoding: {e}"))
}

fn save_config(path: &Path, pretty: bool) -> Result<SaveConfig, String> {
    let format = ModelFormat::from_path(path).map_err(|e| format!("Output path error: {e}"))?;
    Ok(SaveConfig::new(format).with_pretty(pretty))
}

fn select_rows(table: &FeatureTable, indices: &[usize]) -> Result<FeatureTable, String> {
    let rows = indices.iter().map(|&i| table.rows()[i].clone()).collect();
    FeatureTable::new(table.columns().to_vec(), rows).map_err(|e| format!("Split failed: {e}"))
}
