//! Neighbour interpolation oversampling
//!
//! For each minority label, a synthetic vector is placed at a random point on
//! the segment between a randomly chosen row and one of its `k` nearest
//! same-label neighbours.

use crate::features::{FeatureVector, LabeledVector};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeMap;

/// Why interpolation could not run. Never leaves the balancer: every variant
/// triggers the replacement fallback.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum InterpolationError {
    #[error("label '{label}' has {count} rows, interpolation needs more than {k} neighbours")]
    InsufficientNeighbours { label: String, count: usize, k: usize },

    #[error("label '{label}' contains non-finite feature values")]
    NonFinite { label: String },

    #[error("neighbour count must be positive")]
    ZeroNeighbours,
}

fn distance_sq(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Indices of the `k` nearest points to `points[i]`, excluding itself.
/// Ties go to the lower index.
fn nearest_neighbours(points: &[[f64; 4]], i: usize, k: usize) -> Vec<usize> {
    let mut others: Vec<(f64, usize)> = points
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .map(|(j, p)| (distance_sq(&points[i], p), j))
        .collect();
    others.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    others.into_iter().take(k).map(|(_, j)| j).collect()
}

/// Synthetic rows bringing every label up to `target`, labels in sorted order.
pub(crate) fn interpolate(
    records: &[LabeledVector],
    counts: &BTreeMap<String, usize>,
    target: usize,
    k: usize,
    rng: &mut StdRng,
) -> Result<Vec<LabeledVector>, InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::ZeroNeighbours);
    }

    let mut synthetic = Vec::new();
    for (label, &count) in counts {
        if count >= target {
            continue;
        }
        if count <= k {
            return Err(InterpolationError::InsufficientNeighbours {
                label: label.clone(),
                count,
                k,
            });
        }

        let points: Vec<[f64; 4]> = records
            .iter()
            .filter(|r| &r.label == label)
            .map(|r| r.features.to_array())
            .collect();
        if points.iter().flatten().any(|v| !v.is_finite()) {
            return Err(InterpolationError::NonFinite {
                label: label.clone(),
            });
        }

        let neighbours: Vec<Vec<usize>> = (0..points.len())
            .map(|i| nearest_neighbours(&points, i, k))
            .collect();

        for _ in 0..target - count {
            let i = rng.random_range(0..points.len());
            let j = neighbours[i][rng.random_range(0..k)];
            let gap: f64 = rng.random();
            let mut values = points[i];
            for (v, n) in values.iter_mut().zip(points[j]) {
                *v += gap * (n - *v);
            }
            synthetic.push(LabeledVector::new(
                FeatureVector::from_array(values),
                label.clone(),
            ));
        }
    }
    Ok(synthetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn labeled(label: &str, x: f64) -> LabeledVector {
        LabeledVector::new(FeatureVector::from_array([x, x, 0.0, 1.0]), label)
    }

    #[test]
    fn test_nearest_neighbours_excludes_self() {
        let points = [[0.0; 4], [1.0, 0.0, 0.0, 0.0], [5.0, 0.0, 0.0, 0.0]];
        assert_eq!(nearest_neighbours(&points, 0, 2), vec![1, 2]);
        assert_eq!(nearest_neighbours(&points, 2, 1), vec![1]);
    }

    #[test]
    fn test_synthetic_points_lie_between_neighbours() {
        let records: Vec<_> = (0..3)
            .map(|i| labeled("B", i as f64))
            .chain((0..6).map(|i| labeled("A", 10.0 + i as f64)))
            .collect();
        let counts = crate::balance::class_counts(&records);
        let mut rng = StdRng::seed_from_u64(7);

        let synthetic = interpolate(&records, &counts, 6, 2, &mut rng).unwrap();
        assert_eq!(synthetic.len(), 3);
        for s in &synthetic {
            assert_eq!(s.label, "B");
            assert!((0.0..=2.0).contains(&s.features.session_duration));
            assert_eq!(s.features.failed_logins, 0.0);
            assert_eq!(s.features.common_commands_enc, 1.0);
        }
    }

    #[test]
    fn test_too_few_rows_fail() {
        let records = vec![labeled("A", 0.0), labeled("A", 1.0), labeled("B", 2.0)];
        let counts = crate::balance::class_counts(&records);
        let mut rng = StdRng::seed_from_u64(0);
        let err = interpolate(&records, &counts, 2, 2, &mut rng).unwrap_err();
        assert!(matches!(err, InterpolationError::InsufficientNeighbours { count: 1, .. }));
    }

    #[test]
    fn test_non_finite_rows_fail() {
        let mut records: Vec<_> = (0..3).map(|i| labeled("B", i as f64)).collect();
        records[1].features.command_count = f64::NAN;
        records.extend((0..4).map(|i| labeled("A", i as f64)));
        let counts = crate::balance::class_counts(&records);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            interpolate(&records, &counts, 4, 2, &mut rng),
            Err(InterpolationError::NonFinite { .. })
        ));
    }
}
