use enmg_core::models::measurement::MeasurementSet;
use enmg_core::models::nerve::{CombinedIndexComponents, NerveMeasurement, NerveStatus};
use enmg_core::models::reference::RangePosition;
use enmg_patterns::PatternCatalog;
use enmg_patterns::error::ReferenceError;
use enmg_patterns::reference::{
    COMBINED_SENSORY_INDEX_MAX, combined_sensory_index, combined_sensory_index_from,
    interpret_nerve, nerve_ids, nerve_reference, out_of_range,
};

fn reading(latency: f64, velocity: f64, amplitude: f64) -> NerveMeasurement {
    NerveMeasurement {
        latency,
        velocity,
        amplitude,
    }
}

#[test]
fn knows_six_nerves() {
    let ids: Vec<_> = nerve_ids().collect();
    assert_eq!(ids, ["mediano", "cubital", "peroneo", "tibial", "sural", "radial"]);
    assert_eq!(nerve_reference("sural").unwrap().amplitude.min, 10.0);
}

#[test]
fn normal_nerve() {
    let result = interpret_nerve("mediano", reading(3.5, 55.0, 10.0)).unwrap();
    assert_eq!(result.nerve, "Nervio Mediano");
    assert_eq!(result.status, NerveStatus::Normal);
    assert_eq!(
        result.interpretation,
        [
            "Latencia normal (3.5 ms).",
            "Velocidad de conducción normal (55 m/s).",
            "Amplitud normal (10 mV).",
            "Todos los parámetros de conducción del Nervio Mediano se encuentran dentro de los rangos normales.",
        ]
    );
}

#[test]
fn demyelinating_median_recommends_emg() {
    let result = interpret_nerve("mediano", reading(5.0, 40.0, 10.0)).unwrap();
    assert_eq!(result.status, NerveStatus::Abnormal);
    assert_eq!(
        result.interpretation[0],
        "Latencia prolongada (5 ms): posible neuropatía desmielinizante."
    );
    assert!(
        result.interpretation[3].contains("predominantemente desmielinizante del Nervio Mediano")
    );
    assert!(result.interpretation[4].contains("Síndrome del Túnel Carpiano"));
    assert_eq!(result.interpretation.len(), 5);
}

#[test]
fn axonal_peroneal_recommends_workup() {
    let result = interpret_nerve("peroneo", reading(4.0, 50.0, 1.0)).unwrap();
    assert_eq!(result.status, NerveStatus::Abnormal);
    assert!(result.interpretation[2].starts_with("Amplitud reducida (1 mV)"));
    assert!(result.interpretation[3].contains("predominantemente axonal del Nervio Peroneo"));
    assert!(result.interpretation[4].contains("radiculopatía lumbar"));
}

#[test]
fn mixed_tibial_pattern() {
    let result = interpret_nerve("tibial", reading(7.0, 30.0, 1.0)).unwrap();
    assert!(result.interpretation[3].starts_with("Hallazgos compatibles con neuropatía mixta"));
    assert!(result.interpretation[4].contains("polineuropatía"));
}

#[test]
fn ulnar_latency_without_pattern_still_recommends_elbow() {
    // Latency alone: no combined pattern sentence.
    let result = interpret_nerve("cubital", reading(4.5, 55.0, 10.0)).unwrap();
    assert_eq!(result.interpretation.len(), 4);
    assert!(result.interpretation[3].contains("región del codo"));
}

#[test]
fn unknown_nerve_is_an_error() {
    let err = interpret_nerve("trigeminal", reading(1.0, 1.0, 1.0)).unwrap_err();
    assert!(matches!(err, ReferenceError::UnknownNerve(ref n) if n == "trigeminal"));
}

#[test]
fn flags_values_outside_protocol_ranges() {
    let measurements = MeasurementSet::new()
        .with("medianSensory", "latency", 4.0)
        .with("medianSensory", "amplitude", 30.0)
        .with("medianMotor", "velocity", 45.0)
        .with("medianMotor", "fWave", 99.0)
        .with("unknownTest", "latency", 100.0);

    let flagged = out_of_range(&measurements, PatternCatalog::builtin());
    let summary: Vec<_> = flagged
        .iter()
        .map(|f| (f.step_id.as_str(), f.param.as_str(), f.position))
        .collect();
    assert_eq!(
        summary,
        [
            ("medianSensory", "latency", RangePosition::Above),
            ("medianMotor", "velocity", RangePosition::Below),
        ]
    );
    let json = serde_json::to_value(&flagged[0]).unwrap();
    assert_eq!(json["stepId"], "medianSensory");
    assert_eq!(json["position"], "above");
    assert_eq!(json["range"]["max"], 3.5);
}

fn components(palm_diff: f64, ring_diff: f64, thumb_diff: f64) -> CombinedIndexComponents {
    CombinedIndexComponents {
        palm_diff,
        ring_diff,
        thumb_diff,
    }
}

#[test]
fn combined_index_sums_components() {
    let index = combined_sensory_index(components(0.5, 0.25, 0.125));
    assert_eq!(index.value, 0.875);
    assert_eq!(index.max, COMBINED_SENSORY_INDEX_MAX);
    assert_eq!(index.status, NerveStatus::Normal);
    assert_eq!(index.interpretation, "Índice sensorial combinado normal (0.875 ms).");
}

#[test]
fn combined_index_above_limit_suggests_median_neuropathy() {
    let index = combined_sensory_index(components(0.5, 0.25, 0.25));
    assert_eq!(index.value, 1.0);
    assert_eq!(index.status, NerveStatus::Abnormal);
    assert!(index.interpretation.contains("mayor que 0.9"));
    assert!(index.interpretation.contains("neuropatía del nervio mediano"));
}

#[test]
fn combined_index_at_limit_is_normal() {
    let index = combined_sensory_index(components(0.9, 0.0, 0.0));
    assert_eq!(index.status, NerveStatus::Normal);
}

#[test]
fn combined_index_needs_every_component() {
    let partial = MeasurementSet::new()
        .with("combinedIndex", "palmDiff", 0.5)
        .with("combinedIndex", "ringDiff", 0.25);
    assert!(combined_sensory_index_from(&partial).is_none());

    let full = partial.with("combinedIndex", "thumbDiff", 0.0);
    let index = combined_sensory_index_from(&full).unwrap();
    assert_eq!(index.components, components(0.5, 0.25, 0.0));
    assert_eq!(index.value, 0.75);
}
