//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = PipelineSpec> {
    (
        0.01f64..0.99,   // test_size
        1usize..10,      // k_neighbors
        1usize..10,      // support margin over k
        1usize..100,     // sample_rows
        any::<u64>(),    // seed
    )
        .prop_map(|(test_size, k, margin, sample_rows, seed)| {
            let mut spec = PipelineSpec::default();
            spec.train.test_size = test_size;
            spec.train.seed = seed;
            spec.balance.settings.k_neighbors = k;
            spec.balance.settings.min_interpolation_support = k + margin;
            spec.balance.settings.seed = seed;
            spec.schema.sample_rows = sample_rows;
            spec
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_test_size_outside_unit_interval_fails(test_size in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0]) {
        let mut spec = PipelineSpec::default();
        spec.train.test_size = test_size;
        let result = validate_config(&spec);
        prop_assert!(matches!(result, Err(ValidationError::InvalidTestSize(_))));
    }

    #[test]
    fn prop_support_at_or_below_k_fails(k in 1usize..20, below in 0usize..20) {
        let mut spec = PipelineSpec::default();
        spec.balance.settings.k_neighbors = k;
        spec.balance.settings.min_interpolation_support = k.saturating_sub(below);
        let result = validate_config(&spec);
        prop_assert!(
            matches!(result, Err(ValidationError::InvalidInterpolationSupport { .. })),
            "expected support error"
        );
    }
}
