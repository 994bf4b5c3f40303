//! Aggregate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PipelineSpec;
use crate::data::read_records;
use crate::features::{aggregate_sessions, sessions_to_records, SessionSummary};
use crate::io::write_records;
use std::collections::BTreeMap;

pub fn run_aggregate(spec: &PipelineSpec, level: LogLevel) -> Result<(), String> {
    let section = &spec.aggregate;
    log(
        level,
        LogLevel::Normal,
        &format!("Reading events: {}", section.input.display()),
    );

    let events = read_records(&section.input).map_err(|e| format!("Ingest error: {e}"))?;
    log(
        level,
        LogLevel::Verbose,
        &format!("  {} rows, columns: {:?}", events.len(), events.columns()),
    );

    let sessions = aggregate_sessions(&events, &section.settings)
        .map_err(|e| format!("Aggregation failed: {e}"))?;
    let mut records = sessions_to_records(&sessions).map_err(|e| format!("Aggregation failed: {e}"))?;

    if section.append && section.output.exists() {
        let existing =
            read_records(&section.output).map_err(|e| format!("Ingest error: {e}"))?;
        log(
            level,
            LogLevel::Verbose,
            &format!("  Appending to {} existing rows", existing.len()),
        );
        records = existing.concat(&records);
    }

    write_records(&section.output, &records).map_err(|e| format!("Write failed: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Wrote {} sessions ({} rows total) to {}",
            sessions.len(),
            records.len(),
            section.output.display()
        ),
    );
    for (label, count) in label_counts(&sessions) {
        log(level, LogLevel::Verbose, &format!("  {label}: {count}"));
    }

    Ok(())
}

fn label_counts(sessions: &[SessionSummary]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for session in sessions {
        *counts.entry(session.attack_type.as_str()).or_insert(0) += 1;
    }
    counts
}
