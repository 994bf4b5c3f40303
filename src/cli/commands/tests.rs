//! CLI command tests

use super::*;
use crate::config::parse_args;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<(), String> {
    let mut argv = vec!["honeyset", "-q"];
    argv.extend_from_slice(args);
    run_command(parse_args(argv).unwrap())
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn write_features(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

/// {A:6, B:3} with numeric features; both labels meet the interpolation guard
fn interpolable_features() -> String {
    let mut body = String::from("session_duration,command_count,failed_logins,command,attack_type\n");
    for i in 0..6 {
        body.push_str(&format!("{},{},{},ls,A\n", 10 + i, i, i % 2));
    }
    for i in 0..3 {
        body.push_str(&format!("{},{},{},cat /etc/passwd,B\n", 100 + i, 5 + i, 0));
    }
    body
}

fn label_counts(path: &Path) -> std::collections::BTreeMap<String, usize> {
    let records = crate::data::read_records(path).unwrap();
    let mut counts = std::collections::BTreeMap::new();
    for label in records.column("label").unwrap() {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// balance
// =============================================================================

#[test]
fn test_balance_command_equalizes_labels() {
    let dir = TempDir::new().unwrap();
    let input = write_features(&dir, "features.csv", &interpolable_features());
    let output = dir.path().join("balanced.csv");

    run(&["balance", "-i", path_str(&input), "-o", path_str(&output)]).unwrap();

    let counts = label_counts(&output);
    assert_eq!(counts["A"], 6);
    assert_eq!(counts["B"], 6);

    let header = fs::read_to_string(&output).unwrap();
    assert!(header.starts_with(
        "session_duration,command_count,failed_logins,common_commands_enc,label"
    ));
}

#[test]
fn test_balance_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let input = write_features(&dir, "features.csv", &interpolable_features());
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    run(&["balance", "-i", path_str(&input), "-o", path_str(&first), "--seed", "9"]).unwrap();
    run(&["balance", "-i", path_str(&input), "-o", path_str(&second), "--seed", "9"]).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_balance_without_label_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_features(&dir, "features.csv", "src_ip,duration\n1.2.3.4,5\n");
    let output = dir.path().join("balanced.csv");

    run(&["balance", "-i", path_str(&input), "-o", path_str(&output)]).unwrap();
    assert!(!output.exists());
}

#[test]
fn test_balance_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("balanced.csv");
    let missing = dir.path().join("missing.csv");

    let err = run(&["balance", "-i", path_str(&missing), "-o", path_str(&output)]).unwrap_err();
    assert!(err.contains("Ingest error"));
    assert!(!output.exists());
}

#[test]
fn test_balance_rejects_invalid_override() {
    let dir = TempDir::new().unwrap();
    let input = write_features(&dir, "features.csv", &interpolable_features());

    let err = run(&["balance", "-i", path_str(&input), "-k", "0"]).unwrap_err();
    assert!(err.contains("Validation failed"));
}

// =============================================================================
// aggregate
// =============================================================================

#[test]
fn test_aggregate_appends_to_existing_output() {
    let dir = TempDir::new().unwrap();
    let events = write_features(
        &dir,
        "events.csv",
        "timestamp,src_ip,session,duration,eventid,command\n\
         t1,1.1.1.1,s1,3,cowrie.login.failed,\n\
         t2,1.1.1.1,s1,7,cowrie.login.failed,\n\
         t3,2.2.2.2,s2,1,cowrie.command.input,ls\n",
    );
    let output = dir.path().join("sessions.csv");

    run(&["aggregate", "-i", path_str(&events), "-o", path_str(&output)]).unwrap();
    assert_eq!(crate::data::read_records(&output).unwrap().len(), 2);

    run(&["aggregate", "-i", path_str(&events), "-o", path_str(&output)]).unwrap();
    assert_eq!(crate::data::read_records(&output).unwrap().len(), 4);

    run(&["aggregate", "-i", path_str(&events), "-o", path_str(&output), "--overwrite"]).unwrap();
    let records = crate::data::read_records(&output).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records.value(0, "failed_logins"), Some("2"));
    assert_eq!(records.value(0, "session_duration"), Some("7"));
}

// =============================================================================
// train + predict
// =============================================================================

#[test]
fn test_train_then_predict() {
    let dir = TempDir::new().unwrap();
    let input = write_features(&dir, "features.csv", &interpolable_features());
    let balanced = dir.path().join("balanced.csv");
    let model = dir.path().join("model.json");
    let labels = dir.path().join("labels.json");
    let predictions = dir.path().join("predictions.csv");

    run(&["balance", "-i", path_str(&input), "-o", path_str(&balanced)]).unwrap();
    run(&[
        "train",
        "-d",
        path_str(&balanced),
        "-m",
        path_str(&model),
        "-l",
        path_str(&labels),
    ])
    .unwrap();
    assert!(model.exists());
    assert!(labels.exists());

    let x_test = write_features(
        &dir,
        "x_test.csv",
        "src_ip,session_duration,command_count,failed_logins,command\n\
         9.9.9.9,101,6,0,cat /etc/passwd\n",
    );
    run(&[
        "predict",
        "-i",
        path_str(&x_test),
        "-o",
        path_str(&predictions),
        "-m",
        path_str(&model),
        "-l",
        path_str(&labels),
        "--no-fallback",
    ])
    .unwrap();

    let out = crate::data::read_records(&predictions).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.value(0, "src_ip"), Some("9.9.9.9"));
    assert_eq!(out.value(0, "pred_label"), Some("B"));
    assert_eq!(out.value(0, "pred_proba_max"), Some(""));

    let artifact: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&model).unwrap()).unwrap();
    assert_eq!(artifact["metadata"]["architecture"], "random_forest");
    assert_eq!(
        artifact["feature_names"],
        serde_json::json!([
            "session_duration",
            "command_count",
            "failed_logins",
            "common_commands_enc"
        ])
    );
}

#[test]
fn test_train_rejects_unknown_model_extension() {
    let dir = TempDir::new().unwrap();
    let balanced = write_features(
        &dir,
        "balanced.csv",
        "session_duration,command_count,failed_logins,common_commands_enc,label\n\
         1,1,0,2,A\n2,1,0,2,A\n30,9,0,7,B\n31,9,0,7,B\n",
    );
    let model = dir.path().join("model.pkl");

    let err = run(&["train", "-d", path_str(&balanced), "-m", path_str(&model)]).unwrap_err();
    assert!(err.contains("Unsupported file extension"));
    assert!(!model.exists());
}

#[test]
fn test_predict_without_model_fails() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("absent.json");

    let err = run(&["predict", "-m", path_str(&model)]).unwrap_err();
    assert!(err.contains("Failed to load model"));
}

// =============================================================================
// validate / info / inspect
// =============================================================================

#[test]
fn test_validate_command() {
    let dir = TempDir::new().unwrap();
    let good = write_features(&dir, "good.yaml", "balance:\n  seed: 3\n");
    let bad = write_features(&dir, "bad.yaml", "train:\n  test_size: 2.0\n");

    run(&["validate", path_str(&good), "--detailed"]).unwrap();
    let err = run(&["validate", path_str(&bad)]).unwrap_err();
    assert!(err.contains("test size"));
}

#[test]
fn test_global_config_is_used() {
    let dir = TempDir::new().unwrap();
    let input = write_features(&dir, "features.csv", &interpolable_features());
    let output = dir.path().join("from_config.csv");
    let config = write_features(
        &dir,
        "pipeline.yaml",
        &format!(
            "balance:\n  input: {}\n  output: {}\n",
            path_str(&input),
            path_str(&output)
        ),
    );

    run(&["--config", path_str(&config), "balance"]).unwrap();
    assert!(output.exists());
}

#[test]
fn test_info_and_inspect_commands() {
    let dir = TempDir::new().unwrap();
    let input = write_features(&dir, "features.csv", &interpolable_features());

    run(&["info"]).unwrap();
    run(&["info", "--format", "yaml"]).unwrap();
    run(&["inspect", path_str(&input), "--format", "json"]).unwrap();

    let missing = dir.path().join("missing.csv");
    assert!(run(&["inspect", path_str(&missing)]).is_err());
}
