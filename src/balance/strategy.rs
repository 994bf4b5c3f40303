//! Balancing strategies and the guard that picks between them

use crate::features::LabeledVector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How minority classes were brought up to the majority count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStrategy {
    /// Synthetic vectors interpolated between same-label neighbours
    Interpolation,
    /// Existing rows drawn again with replacement
    Replacement,
}

impl fmt::Display for BalanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interpolation => write!(f, "synthetic interpolation"),
            Self::Replacement => write!(f, "replacement resampling"),
        }
    }
}

/// Rows per label, in sorted label order.
pub fn class_counts(records: &[LabeledVector]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in records {
        *counts.entry(r.label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Interpolation needs every label to have at least `min_support` rows;
/// anything less goes straight to replacement.
#[must_use]
pub fn choose_strategy(counts: &BTreeMap<String, usize>, min_support: usize) -> BalanceStrategy {
    match counts.values().min() {
        Some(&min) if min >= min_support => BalanceStrategy::Interpolation,
        _ => BalanceStrategy::Replacement,
    }
}
