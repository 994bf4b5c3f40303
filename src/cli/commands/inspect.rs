//! Inspect command implementation

use crate::balance::{choose_strategy, class_counts, BalanceStrategy};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{InspectArgs, OutputFormat, PipelineSpec};
use crate::data::{read_records, RecordSet};
use crate::features::labeled_vectors;
use crate::schema::{CanonicalFeature, ResolvedColumn, SchemaResolver};
use serde::Serialize;
use std::collections::BTreeMap;

/// Column found by a discovery strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
struct Located {
    column: String,
    found_by: String,
}

impl From<&ResolvedColumn> for Located {
    fn from(c: &ResolvedColumn) -> Self {
        Self {
            column: c.name.clone(),
            found_by: c.discovery.to_string(),
        }
    }
}

/// How a file would flow through the balancing stage
#[derive(Debug, Clone, PartialEq, Serialize)]
struct InspectSummary {
    rows: usize,
    columns: Vec<String>,
    label: Option<Located>,
    /// Canonical feature → source; `None` means synthesized as zeros
    features: BTreeMap<CanonicalFeature, Option<Located>>,
    label_counts: BTreeMap<String, usize>,
    strategy: Option<BalanceStrategy>,
}

fn summarize(records: &RecordSet, spec: &PipelineSpec) -> InspectSummary {
    let resolver = SchemaResolver::new(spec.schema.clone());
    let mapping = resolver.resolve_features(records);

    let mut features = BTreeMap::new();
    for feature in CanonicalFeature::ALL {
        let source = match feature {
            CanonicalFeature::CommonCommandsEnc => mapping.categorical.as_ref().map(|f| Located {
                column: f.clone(),
                found_by: "length proxy".to_string(),
            }),
            other => mapping.get(other).map(Located::from),
        };
        features.insert(feature, source);
    }

    let (label, label_counts, strategy) = match resolver.resolve(records) {
        Ok(schema) => {
            let counts = class_counts(&labeled_vectors(records, &schema));
            let strategy = (!counts.is_empty()).then(|| {
                choose_strategy(&counts, spec.balance.settings.min_interpolation_support)
            });
            (Some(Located::from(&schema.label)), counts, strategy)
        }
        Err(_) => (None, BTreeMap::new(), None),
    };

    InspectSummary {
        rows: records.len(),
        columns: records.columns().to_vec(),
        label,
        features,
        label_counts,
        strategy,
    }
}

fn render_text(summary: &InspectSummary) -> String {
    let mut lines = vec![
        format!("Shape: ({}, {})", summary.rows, summary.columns.len()),
        format!("Columns: {:?}", summary.columns),
    ];

    match &summary.label {
        Some(label) => lines.push(format!(
            "Label column: {} ({})",
            label.column, label.found_by
        )),
        None => lines.push("Label column: none found".to_string()),
    }

    lines.push("Features:".to_string());
    for (feature, source) in &summary.features {
        lines.push(match source {
            Some(s) => format!("  {feature} <- {} ({})", s.column, s.found_by),
            None => format!("  {feature} <- 0"),
        });
    }

    if !summary.label_counts.is_empty() {
        lines.push("Label counts:".to_string());
        for (label, count) in &summary.label_counts {
            lines.push(format!("  {label}: {count}"));
        }
    }
    if let Some(strategy) = summary.strategy {
        lines.push(format!("Balancing strategy: {strategy}"));
    }
    lines.join("\n")
}

pub fn run_inspect(args: &InspectArgs, spec: &PipelineSpec, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Inspecting: {}", args.input.display()),
    );

    let records = read_records(&args.input).map_err(|e| format!("Ingest error: {e}"))?;
    let summary = summarize(&records, spec);

    match args.format {
        OutputFormat::Text => println!("{}", render_text(&summary)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&summary)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(columns: &[&str], rows: &[&[&str]]) -> RecordSet {
        RecordSet::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_summary_reports_label_and_strategy() {
        let set = records(
            &["attack_type", "session_duration", "command"],
            &[
                &["Brute Force", "10", "ls"],
                &["Brute Force", "12", "pwd"],
                &["Other", "3", "cat"],
            ],
        );
        let summary = summarize(&set, &PipelineSpec::default());

        let label = summary.label.as_ref().unwrap();
        assert_eq!(label.column, "attack_type");
        assert_eq!(label.found_by, "exact name");
        assert_eq!(summary.label_counts["Brute Force"], 2);
        assert_eq!(summary.strategy, Some(BalanceStrategy::Replacement));
        assert_eq!(
            summary.features[&CanonicalFeature::SessionDuration].as_ref().unwrap().column,
            "session_duration"
        );
        assert!(summary.features[&CanonicalFeature::FailedLogins].is_none());
        assert_eq!(
            summary.features[&CanonicalFeature::CommonCommandsEnc].as_ref().unwrap().column,
            "command"
        );
    }

    #[test]
    fn test_summary_without_label() {
        let set = records(&["src_ip", "duration"], &[&["1.2.3.4", "5"]]);
        let summary = summarize(&set, &PipelineSpec::default());

        assert!(summary.label.is_none());
        assert!(summary.strategy.is_none());
        let text = render_text(&summary);
        assert!(text.contains("Label column: none found"));
        assert!(text.contains("failed_logins <- 0"));
    }
}
