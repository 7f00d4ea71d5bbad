use enmg_core::models::measurement::MeasurementSet;
use enmg_patterns::catalog::definition::{FindingDefinition, PatternDefinition};
use enmg_patterns::differential::{rank_differentials, reason};
use enmg_patterns::scoring::ImportanceWeights;
use enmg_patterns::{AnalysisOptions, PatternCatalog};

/// A pattern whose findings all test `<test>.<param> > 0`.
fn pattern(id: &str, findings: &[(&str, &str)]) -> PatternDefinition {
    PatternDefinition::new(
        id,
        &format!("Pattern {id}"),
        &[],
        findings
            .iter()
            .map(|(param, importance)| {
                FindingDefinition::new(&format!("{id}.{param}"), ">0", importance)
            })
            .collect(),
    )
}

/// Four high findings and two medium ones: ten points in total.
fn ten_point(id: &str) -> PatternDefinition {
    pattern(
        id,
        &[
            ("a", "high"),
            ("b", "high"),
            ("c", "high"),
            ("d", "high"),
            ("e", "medium"),
            ("f", "medium"),
        ],
    )
}

fn catalog(patterns: Vec<PatternDefinition>) -> PatternCatalog {
    PatternCatalog::from_definitions(patterns, vec![], vec![]).unwrap()
}

/// Set `<id>.<param>` to 1 (condition true) or -1 (false).
fn record(set: MeasurementSet, id: &str, values: &[(&str, bool)]) -> MeasurementSet {
    values.iter().fold(set, |set, (param, met)| {
        set.with(id, *param, if *met { 1.0 } else { -1.0 })
    })
}

#[test]
fn ranks_descending_and_drops_threshold_value() {
    let catalog = catalog(vec![
        pattern("primary", &[("x", "high")]),
        ten_point("strong"),
        ten_point("borderline"),
        pattern("middle", &[("a", "high"), ("b", "high")]),
    ]);

    let mut measurements = MeasurementSet::new().with("primary", "x", 1.0);
    // 9 / 10
    measurements = record(
        measurements,
        "strong",
        &[("a", true), ("b", true), ("c", true), ("d", true), ("e", true), ("f", false)],
    );
    // 3 / 10
    measurements = record(
        measurements,
        "borderline",
        &[("a", true), ("b", false), ("c", false), ("d", false), ("e", true), ("f", false)],
    );
    // 2 / 4
    measurements = record(measurements, "middle", &[("a", true), ("b", false)]);

    let ranked =
        rank_differentials(&measurements, "primary", &catalog, &AnalysisOptions::default());

    let summary: Vec<_> = ranked.iter().map(|d| (d.id.as_str(), d.probability)).collect();
    assert_eq!(summary, [("strong", 0.9), ("middle", 0.5)]);
    assert_eq!(ranked[0].name, "Pattern strong");
    assert_eq!(
        ranked[0].reason,
        "Coincide con 5 de los hallazgos clave para este diagnóstico."
    );
    assert_eq!(
        ranked[1].reason,
        "Coincide con 1 de los hallazgos clave para este diagnóstico."
    );
}

#[test]
fn just_above_threshold_is_kept() {
    let catalog = catalog(vec![
        pattern("primary", &[("x", "high")]),
        pattern("edge", &[("a", "high"), ("b", "medium")]),
    ]);
    let measurements = record(MeasurementSet::new(), "edge", &[("a", true), ("b", false)]);
    let options = AnalysisOptions {
        weights: ImportanceWeights {
            high: 30_000_001,
            medium: 69_999_999,
        },
        ..AnalysisOptions::default()
    };

    let ranked = rank_differentials(&measurements, "primary", &catalog, &options);
    assert_eq!(ranked.len(), 1);
    assert!(ranked[0].probability > 0.3);
    assert!((ranked[0].probability - 0.30000001).abs() < 1e-15);
}

#[test]
fn equal_probabilities_keep_catalog_order() {
    let catalog = catalog(vec![
        pattern("tieOne", &[("a", "high"), ("b", "high")]),
        pattern("primary", &[("x", "high")]),
        pattern("tieTwo", &[("a", "medium"), ("b", "medium")]),
        pattern("tieThree", &[("a", "high"), ("b", "high")]),
        pattern("best", &[("a", "high")]),
    ]);

    let mut measurements = MeasurementSet::new();
    for id in ["tieOne", "tieTwo", "tieThree"] {
        measurements = record(measurements, id, &[("a", true), ("b", false)]);
    }
    measurements = record(measurements, "best", &[("a", true)]);

    let options = AnalysisOptions::default();
    let first = rank_differentials(&measurements, "primary", &catalog, &options);
    let ids: Vec<_> = first.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["best", "tieOne", "tieTwo", "tieThree"]);

    for _ in 0..5 {
        assert_eq!(rank_differentials(&measurements, "primary", &catalog, &options), first);
    }
}

#[test]
fn unscoreable_candidates_are_not_differentials() {
    let catalog = catalog(vec![
        pattern("primary", &[("x", "high")]),
        pattern("unmeasured", &[("a", "high")]),
        pattern("measured", &[("a", "high")]),
    ]);
    let measurements = record(MeasurementSet::new(), "measured", &[("a", true)]);

    let ranked =
        rank_differentials(&measurements, "primary", &catalog, &AnalysisOptions::default());
    let ids: Vec<_> = ranked.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["measured"]);
}

#[test]
fn excluded_id_is_never_ranked() {
    let catalog = catalog(vec![pattern("primary", &[("x", "high")])]);
    let measurements = MeasurementSet::new().with("primary", "x", 1.0);
    let ranked =
        rank_differentials(&measurements, "primary", &catalog, &AnalysisOptions::default());
    assert!(ranked.is_empty());
}

#[test]
fn reason_counts_matched_findings() {
    assert_eq!(
        reason(2),
        "Coincide con 2 de los hallazgos clave para este diagnóstico."
    );
    assert_eq!(
        reason(0),
        "Algunos hallazgos son compatibles con este diagnóstico."
    );
}

#[test]
fn zero_probability_candidates_are_never_ranked() {
    let catalog = catalog(vec![
        pattern("primary", &[("x", "high")]),
        pattern("quiet", &[("a", "high")]),
    ]);
    let measurements = record(MeasurementSet::new(), "quiet", &[("a", false)]);
    let options = AnalysisOptions {
        min_differential_probability: 0.0,
        ..AnalysisOptions::default()
    };

    assert!(rank_differentials(&measurements, "primary", &catalog, &options).is_empty());
}
