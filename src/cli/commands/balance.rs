//! Balance command implementation

use crate::balance::{balance, BalanceReport};
use crate::cli::logging::{diagnostic, log};
use crate::cli::LogLevel;
use crate::config::PipelineSpec;
use crate::data::read_records;
use crate::features::labeled_vectors;
use crate::io::write_balanced_dataset;
use crate::schema::{ResolvedSchema, SchemaResolver};

/// Ingest, resolve, normalize, balance and write.
///
/// A missing label column halts the run with a diagnostic and leaves the
/// output path untouched; it is not reported as a failure.
pub fn run_balance(spec: &PipelineSpec, level: LogLevel) -> Result<(), String> {
    let section = &spec.balance;
    log(
        level,
        LogLevel::Normal,
        &format!("Reading {}", section.input.display()),
    );

    let records = read_records(&section.input).map_err(|e| format!("Ingest error: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!("  Initial shape: ({}, {})", records.len(), records.width()),
    );

    let schema = match SchemaResolver::new(spec.schema.clone()).resolve(&records) {
        Ok(schema) => schema,
        Err(e) if e.is_recoverable() => {
            diagnostic(&e.to_string());
            diagnostic(&format!(
                "Balancing halted; {} was not written",
                section.output.display()
            ));
            return Ok(());
        }
        Err(e) => return Err(format!("Schema error: {e}")),
    };
    log_schema(level, &schema);

    let vectors = labeled_vectors(&records, &schema);
    let report = balance(vectors, &section.settings).map_err(|e| format!("Balancing failed: {e}"))?;
    log_report(level, &report);

    write_balanced_dataset(&section.output, &report.records)
        .map_err(|e| format!("Write failed: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Saved balanced dataset to {} ({} rows)",
            section.output.display(),
            report.records.len()
        ),
    );

    Ok(())
}

fn log_schema(level: LogLevel, schema: &ResolvedSchema) {
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Using label column: {} ({})",
            schema.label.name, schema.label.discovery
        ),
    );
    for (feature, column) in &schema.features.columns {
        log(
            level,
            LogLevel::Verbose,
            &format!("  {feature} <- {} ({})", column.name, column.discovery),
        );
    }
    if let Some(field) = &schema.features.categorical {
        log(
            level,
            LogLevel::Verbose,
            &format!("  common_commands_enc <- len({field})"),
        );
    }
    for feature in schema.features.synthesized() {
        log(level, LogLevel::Verbose, &format!("  {feature} <- 0"));
    }
}

fn log_report(level: LogLevel, report: &BalanceReport) {
    log(
        level,
        LogLevel::Verbose,
        &format!("  Counts before: {:?}", report.counts_before),
    );
    if let Some(reason) = &report.fallback_reason {
        log(
            level,
            LogLevel::Normal,
            &format!("Interpolation failed ({reason}); falling back to resampling"),
        );
    }
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Balanced with {}: {} rows per label",
            report.strategy,
            report.target()
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Counts after: {:?}", report.counts_after),
    );
}
