//! Class balancing
//!
//! Brings every label up to the majority label's row count. Two strategies,
//! one guard and one fallback edge:
//!
//! ```text
//!   min(count) >= min_support ──► Interpolation ──ok──► done
//!            │                         │
//!            no                      error
//!            ▼                         ▼
//!        Replacement ◄─────────────────┘
//! ```
//!
//! The report says which strategy produced the output and, after a fallback,
//! why interpolation was abandoned.

mod resample;
mod smote;
mod strategy;


pub use strategy::{choose_strategy, class_counts, BalanceStrategy};

use crate::error::{Error, Result};
use crate::features::LabeledVector;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Balancer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Seed for every random draw (default: 42)
    pub seed: u64,
    /// Neighbours considered per interpolated row (default: 2)
    pub k_neighbors: usize,
    /// Smallest label count that still permits interpolation (default: 3)
    pub min_interpolation_support: usize,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            k_neighbors: 2,
            min_interpolation_support: 3,
        }
    }
}

/// Outcome of a balancing run
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    /// Balanced rows
    pub records: Vec<LabeledVector>,
    /// Strategy that produced `records`
    pub strategy: BalanceStrategy,
    /// Set when interpolation was attempted and failed
    pub fallback_reason: Option<String>,
    pub counts_before: BTreeMap<String, usize>,
    pub counts_after: BTreeMap<String, usize>,
}

impl BalanceReport {
    /// Rows every label ends up with
    pub fn target(&self) -> usize {
        self.counts_after.values().copied().max().unwrap_or(0)
    }

    pub fn fell_back(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Equalize label frequencies.
///
/// Interpolation output keeps the input rows in order followed by the
/// synthetic rows; replacement output is shuffled with the configured seed.
/// Both are deterministic for a given input and seed.
pub fn balance(records: Vec<LabeledVector>, config: &BalanceConfig) -> Result<BalanceReport> {
    if records.is_empty() {
        return Err(Error::EmptyDataset(
            "no labeled rows to balance".to_string(),
        ));
    }

    let counts_before = class_counts(&records);
    let target = counts_before.values().copied().max().unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut fallback_reason = None;
    if choose_strategy(&counts_before, config.min_interpolation_support)
        == BalanceStrategy::Interpolation
    {
        match smote::interpolate(&records, &counts_before, target, config.k_neighbors, &mut rng) {
            Ok(synthetic) => {
                let mut out = records;
                out.extend(synthetic);
                return Ok(report(out, BalanceStrategy::Interpolation, None, counts_before));
            }
            Err(e) => {
                fallback_reason = Some(e.to_string());
                rng = StdRng::seed_from_u64(config.seed);
            }
        }
    }

    let extra = resample::draw_with_replacement(&records, &counts_before, target, &mut rng);
    let mut out = records;
    out.extend(extra);
    out.shuffle(&mut rng);
    Ok(report(
        out,
        BalanceStrategy::Replacement,
        fallback_reason,
        counts_before,
    ))
}

fn report(
    records: Vec<LabeledVector>,
    strategy: BalanceStrategy,
    fallback_reason: Option<String>,
    counts_before: BTreeMap<String, usize>,
) -> BalanceReport {
    BalanceReport {
        counts_after: class_counts(&records),
        records,
        strategy,
        fallback_reason,
        counts_before,
    }
}
