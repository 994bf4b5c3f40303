//! Session aggregation of extracted honeypot events
//!
//! Collapses an event table (one row per honeypot event) into one feature row
//! per attacker session, with a heuristic `attack_type` label.

use crate::data::{coerce_value, RecordSet};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Thresholds that turn session counters into an attack label.
///
/// Illustrative only; nothing downstream depends on these exact numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPolicy {
    /// Minimum failed logins for a brute-force session (default: 2)
    pub brute_force_min_failed: usize,
    /// Maximum command events for a brute-force session (default: 3)
    pub brute_force_max_commands: usize,
    /// Minimum command events for a command-injection session (default: 3)
    pub injection_min_commands: usize,
    pub brute_force_label: String,
    pub injection_label: String,
    pub other_label: String,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            brute_force_min_failed: 2,
            brute_force_max_commands: 3,
            injection_min_commands: 3,
            brute_force_label: "Brute Force".to_string(),
            injection_label: "Command Injection".to_string(),
            other_label: "Other".to_string(),
        }
    }
}

impl LabelPolicy {
    /// Label a session from its counters. Brute force is checked first.
    pub fn label(&self, failed_logins: usize, command_count: usize) -> &str {
        if failed_logins >= self.brute_force_min_failed
            && command_count <= self.brute_force_max_commands
        {
            &self.brute_force_label
        } else if command_count >= self.injection_min_commands {
            &self.injection_label
        } else {
            &self.other_label
        }
    }
}

/// Field names and markers used while aggregating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// Grouping columns, most preferred first
    pub group_keys: Vec<String>,
    /// Event id of a failed login
    pub failed_login_event: String,
    /// Substrings of an event id that count as command activity
    pub command_markers: Vec<String>,
    /// Free-text fields scanned for the most common token
    pub token_fields: Vec<String>,
    /// Tokens must be shorter than this many characters (default: 40)
    pub max_token_len: usize,
    /// Token used when a session has none
    pub default_token: String,
    pub policy: LabelPolicy,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            group_keys: ["session", "src_ip"].map(String::from).to_vec(),
            failed_login_event: "cowrie.login.failed".to_string(),
            command_markers: ["command", "input", "login"].map(String::from).to_vec(),
            token_fields: ["command", "message", "password"].map(String::from).to_vec(),
            max_token_len: 40,
            default_token: "other".to_string(),
            policy: LabelPolicy::default(),
        }
    }
}

/// Columns of an aggregated feature file, in output order.
pub const SESSION_COLUMNS: [&str; 7] = [
    "timestamp",
    "src_ip",
    "session_duration",
    "command_count",
    "failed_logins",
    "common_commands",
    "attack_type",
];

/// One aggregated attacker session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Value of the grouping column
    pub key: String,
    /// Timestamp of the first event
    pub timestamp: String,
    pub src_ip: String,
    pub session_duration: f64,
    pub command_count: usize,
    pub failed_logins: usize,
    pub common_commands: String,
    pub attack_type: String,
}

impl SessionSummary {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.src_ip.clone(),
            self.session_duration.to_string(),
            self.command_count.to_string(),
            self.failed_logins.to_string(),
            self.common_commands.clone(),
            self.attack_type.clone(),
        ]
    }
}

/// Most frequent token, earliest first occurrence on ties.
fn most_common_token<'a>(
    texts: impl Iterator<Item = &'a str>,
    max_len: usize,
) -> Option<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in texts.flat_map(str::split_whitespace) {
        let word = word.to_lowercase();
        let len = word.chars().count();
        if len == 0 || len >= max_len {
            continue;
        }
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(String, usize)>, (word, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((word, n)),
        })
        .map(|(word, _)| word)
}

/// Cell value, blank when the column is absent.
fn cell<'r>(records: &'r RecordSet, row: usize, column: &str) -> &'r str {
    records.value(row, column).unwrap_or_default()
}

fn summarize(
    records: &RecordSet,
    key: String,
    rows: &[usize],
    config: &AggregateConfig,
) -> SessionSummary {
    let session_duration = rows
        .iter()
        .filter_map(|&r| coerce_value(cell(records, r, "duration")))
        .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0);

    let command_count = rows
        .iter()
        .filter(|&&r| {
            let event = cell(records, r, "eventid");
            config.command_markers.iter().any(|m| event.contains(m.as_str()))
        })
        .count();

    let failed_logins = rows
        .iter()
        .filter(|&&r| cell(records, r, "eventid") == config.failed_login_event)
        .count();

    let texts = config
        .token_fields
        .iter()
        .filter(|f| records.has_column(f))
        .flat_map(|f| rows.iter().map(move |&r| cell(records, r, f.as_str())));
    let common_commands = most_common_token(texts, config.max_token_len)
        .unwrap_or_else(|| config.default_token.clone());

    let first = rows[0];
    SessionSummary {
        key,
        timestamp: cell(records, first, "timestamp").to_string(),
        src_ip: cell(records, first, "src_ip").to_string(),
        session_duration,
        command_count,
        failed_logins,
        attack_type: config.policy.label(failed_logins, command_count).to_string(),
        common_commands,
    }
}

/// Group events into sessions and summarize each, in sorted key order.
///
/// Rows with a blank grouping key are skipped.
pub fn aggregate_sessions(
    records: &RecordSet,
    config: &AggregateConfig,
) -> Result<Vec<SessionSummary>> {
    let group_col = config
        .group_keys
        .iter()
        .find(|k| records.has_column(k))
        .ok_or_else(|| {
            Error::InvalidParameter(format!(
                "event table has none of the grouping columns {:?}",
                config.group_keys
            ))
        })?;

    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, key) in records.column(group_col).unwrap_or_default().into_iter().enumerate() {
        if !key.trim().is_empty() {
            groups.entry(key.to_string()).or_default().push(i);
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, rows)| summarize(records, key, &rows, config))
        .collect())
}

/// Session summaries as a record set with `SESSION_COLUMNS`.
pub fn sessions_to_records(sessions: &[SessionSummary]) -> Result<RecordSet> {
    RecordSet::new(
        SESSION_COLUMNS.map(String::from).to_vec(),
        sessions.iter().map(SessionSummary::to_row).collect(),
    )
}
