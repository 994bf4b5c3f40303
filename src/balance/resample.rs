//! Replacement resampling

use crate::features::LabeledVector;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeMap;

/// Extra rows drawn with replacement until every label reaches `target`,
/// labels in sorted order. Labels already at `target` contribute nothing.
pub(crate) fn draw_with_replacement(
    records: &[LabeledVector],
    counts: &BTreeMap<String, usize>,
    target: usize,
    rng: &mut StdRng,
) -> Vec<LabeledVector> {
    let mut extra = Vec::new();
    for (label, &count) in counts {
        if count >= target {
            continue;
        }
        let pool: Vec<&LabeledVector> = records.iter().filter(|r| &r.label == label).collect();
        for _ in 0..target - count {
            extra.push(pool[rng.random_range(0..pool.len())].clone());
        }
    }
    extra
}
