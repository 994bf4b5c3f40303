//! Tests for label and feature column discovery

use super::*;
use crate::data::RecordSet;
use crate::error::Error;
use proptest::prelude::*;

fn records(columns: &[&str], rows: &[&[&str]]) -> RecordSet {
    RecordSet::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect(),
    )
    .unwrap()
}

// ============================================================
// Label resolution
// ============================================================

#[test]
fn test_label_exact_name_preference() {
    let set = records(&["type", "label", "attack"], &[&["a", "b", "c"]]);
    let resolver = SchemaResolver::default();
    let label = resolver.resolve_label(&set).unwrap();
    assert_eq!(label.name, "attack");
    assert_eq!(label.discovery, Discovery::ExactName);
}

#[test]
fn test_label_attack_type_wins() {
    let set = records(&["label", "attack_type"], &[&["x", "y"]]);
    let label = SchemaResolver::default().resolve_label(&set).unwrap();
    assert_eq!(label.name, "attack_type");
}

#[test]
fn test_label_content_sniff() {
    let set = records(
        &["src_ip", "category", "verdict"],
        &[
            &["1.2.3.4", "ssh", "Brute Force"],
            &["5.6.7.8", "ssh", "OTHER"],
        ],
    );
    let label = SchemaResolver::default().resolve_label(&set).unwrap();
    assert_eq!(label.name, "verdict");
    assert_eq!(label.discovery, Discovery::ContentSniff);
}

#[test]
fn test_label_content_sniff_picks_first_column() {
    let set = records(&["first", "second"], &[&["command", "brute force"]]);
    let label = SchemaResolver::default().resolve_label(&set).unwrap();
    assert_eq!(label.name, "first");
}

#[test]
fn test_no_label_column() {
    let set = records(&["src_ip", "duration"], &[&["1.2.3.4", "10"]]);
    let err = SchemaResolver::default().resolve_label(&set).unwrap_err();
    match err {
        Error::NoLabelColumn { columns } => assert_eq!(columns, vec!["src_ip", "duration"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_label_candidates() {
    let config = ResolverConfig {
        label_candidates: vec!["verdict".to_string()],
        ..Default::default()
    };
    let set = records(&["label", "verdict"], &[&["a", "b"]]);
    let label = SchemaResolver::new(config).resolve_label(&set).unwrap();
    assert_eq!(label.name, "verdict");
}

// ============================================================
// Feature resolution
// ============================================================

#[test]
fn test_features_exact_names() {
    let set = records(
        &[
            "session_duration",
            "command_count",
            "failed_logins",
            "common_commands",
        ],
        &[],
    );
    let mapping = SchemaResolver::default().resolve_features(&set);
    for feature in [
        CanonicalFeature::SessionDuration,
        CanonicalFeature::CommandCount,
        CanonicalFeature::FailedLogins,
    ] {
        let column = mapping.get(feature).unwrap();
        assert_eq!(column.name, feature.name());
        assert_eq!(column.discovery, Discovery::ExactName);
    }
    assert_eq!(mapping.categorical.as_deref(), Some("common_commands"));
    assert!(mapping.synthesized().is_empty());
}

#[test]
fn test_features_name_fragments() {
    let set = records(
        &["Total_Duration_Time", "CommandCountTotal", "num_failed_logins"],
        &[],
    );
    let mapping = SchemaResolver::default().resolve_features(&set);
    assert_eq!(
        mapping.get(CanonicalFeature::SessionDuration).unwrap().name,
        "Total_Duration_Time"
    );
    assert_eq!(
        mapping.get(CanonicalFeature::CommandCount).unwrap().name,
        "CommandCountTotal"
    );
    assert_eq!(
        mapping.get(CanonicalFeature::FailedLogins).unwrap().discovery,
        Discovery::NameFragments
    );
}

#[test]
fn test_exact_name_beats_fragments_and_proxy_is_never_matched() {
    let set = records(
        &["total_duration_time", "session_duration", "common_commands_enc"],
        &[],
    );
    let mapping = SchemaResolver::default().resolve_features(&set);

    let duration = mapping.get(CanonicalFeature::SessionDuration).unwrap();
    assert_eq!(duration.name, "session_duration");
    assert_eq!(duration.discovery, Discovery::ExactName);
    assert!(mapping.get(CanonicalFeature::CommonCommandsEnc).is_none());
}

#[test]
fn test_duration_alone_is_not_enough() {
    let set = records(&["duration"], &[]);
    let mapping = SchemaResolver::default().resolve_features(&set);
    assert!(mapping.get(CanonicalFeature::SessionDuration).is_none());
    assert_eq!(mapping.synthesized().len(), 4);
}

#[test]
fn test_categorical_falls_back_to_command() {
    let set = records(&["command"], &[]);
    let mapping = SchemaResolver::default().resolve_features(&set);
    assert_eq!(mapping.categorical.as_deref(), Some("command"));
}

#[test]
fn test_resolve_requires_label() {
    let set = records(&["session_duration"], &[&["1"]]);
    assert!(SchemaResolver::default().resolve(&set).is_err());

    let set = records(&["session_duration", "label"], &[&["1", "A"]]);
    let schema = SchemaResolver::default().resolve(&set).unwrap();
    assert_eq!(schema.label.name, "label");
    assert!(schema
        .features
        .get(CanonicalFeature::SessionDuration)
        .is_some());
}

// ============================================================
// Property tests
// ============================================================

proptest! {
    #[test]
    fn prop_resolution_is_deterministic(
        names in proptest::collection::vec("[a-z_]{1,16}", 1..8)
    ) {
        let set = RecordSet::with_columns(names.clone());
        let resolver = SchemaResolver::default();

        let first = resolver.resolve_features(&set);
        let second = resolver.resolve_features(&set);
        prop_assert_eq!(first, second);

        let label_a = resolver.resolve_label(&set).ok();
        let label_b = resolver.resolve_label(&set).ok();
        prop_assert_eq!(label_a, label_b);
    }

    #[test]
    fn prop_resolved_columns_exist(
        names in proptest::collection::vec("[a-z_]{1,16}", 1..8)
    ) {
        let set = RecordSet::with_columns(names.clone());
        let mapping = SchemaResolver::default().resolve_features(&set);
        for (_, column) in &mapping.columns {
            prop_assert!(names.contains(&column.name));
        }
    }
}
