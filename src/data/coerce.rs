//! Numeric coercion of textual fields
//!
//! Coercion never resolves missing values itself: `None` is the missing marker
//! and callers decide what it becomes.

/// Coerce one raw value.
///
/// Surrounding whitespace is trimmed; blanks and `none` are missing;
/// `true`/`false` (any case) become `1`/`0`; anything that still does not
/// parse as a finite number is missing.
pub fn coerce_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return None;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Some(1.0);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a whole column.
pub fn coerce_column<S: AsRef<str>>(values: &[S]) -> Vec<Option<f64>> {
    values.iter().map(|v| coerce_value(v.as_ref())).collect()
}

/// Replace missing markers with `fill`.
pub fn fill_missing(values: &[Option<f64>], fill: f64) -> Vec<f64> {
    values.iter().map(|v| v.unwrap_or(fill)).collect()
}

/// True when no value in the column survived coercion.
pub fn is_wholly_missing(values: &[Option<f64>]) -> bool {
    values.iter().all(Option::is_none)
}

/// Character length of each value, the lossy stand-in for categorical text.
///
/// Always defined: never fails and never produces a non-finite number.
pub fn length_proxy<S: AsRef<str>>(values: &[S]) -> Vec<f64> {
    values
        .iter()
        .map(|v| v.as_ref().chars().count() as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(coerce_value("42"), Some(42.0));
        assert_eq!(coerce_value(" 3.5 "), Some(3.5));
        assert_eq!(coerce_value("-1e2"), Some(-100.0));
    }

    #[test]
    fn test_missing_markers() {
        assert_eq!(coerce_value(""), None);
        assert_eq!(coerce_value("   "), None);
        assert_eq!(coerce_value("None"), None);
        assert_eq!(coerce_value("NONE"), None);
        assert_eq!(coerce_value("none"), None);
    }

    #[test]
    fn test_booleans() {
        assert_eq!(coerce_value("true"), Some(1.0));
        assert_eq!(coerce_value("True"), Some(1.0));
        assert_eq!(coerce_value(" FALSE "), Some(0.0));
    }

    #[test]
    fn test_garbage_is_missing() {
        assert_eq!(coerce_value("cowrie.login.failed"), None);
        assert_eq!(coerce_value("12abc"), None);
        assert_eq!(coerce_value("NaN"), None);
        assert_eq!(coerce_value("inf"), None);
    }

    #[test]
    fn test_fill_and_wholly_missing() {
        let coerced = coerce_column(&["1", "x", ""]);
        assert_eq!(coerced, vec![Some(1.0), None, None]);
        assert_eq!(fill_missing(&coerced, 0.0), vec![1.0, 0.0, 0.0]);
        assert!(!is_wholly_missing(&coerced));
        assert!(is_wholly_missing(&coerce_column(&["abc", "de"])));
    }

    #[test]
    fn test_length_proxy() {
        assert_eq!(length_proxy(&["abc", "de", "fghij"]), vec![3.0, 2.0, 5.0]);
        assert_eq!(length_proxy(&["", "wget"]), vec![0.0, 4.0]);
    }

    proptest! {
        #[test]
        fn prop_coerced_values_are_finite(raw in ".*") {
            if let Some(v) = coerce_value(&raw) {
                prop_assert!(v.is_finite());
            }
        }

        #[test]
        fn prop_formatted_floats_round_trip(v in -1.0e9f64..1.0e9) {
            prop_assert_eq!(coerce_value(&format!("  {v}  ")), Some(v));
        }

        #[test]
        fn prop_length_proxy_never_negative(values in proptest::collection::vec(".*", 0..20)) {
            let proxy = length_proxy(&values);
            prop_assert_eq!(proxy.len(), values.len());
            prop_assert!(proxy.iter().all(|v| *v >= 0.0 && v.is_finite()));
        }
    }
}
