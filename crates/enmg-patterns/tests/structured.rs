use enmg_core::models::measurement::MeasurementSet;
use enmg_patterns::structured::to_structured_input;
use enmg_patterns::{PatternCatalog, analyze};

#[test]
fn renders_primary_findings_and_measurements() {
    let catalog = PatternCatalog::builtin();
    let measurements = MeasurementSet::new()
        .with("medianSensory", "latency", 4.0)
        .with("medianMotor", "latency", 3.9)
        .with("customTest", "value", 1.5);
    let result = analyze(&measurements, "carpaTunnel", catalog).unwrap();

    let text = to_structured_input(&result, &measurements, catalog);
    assert!(text.starts_with("## Diagnóstico principal: Síndrome del túnel del carpo\n"));
    assert!(text.contains("Probabilidad: 50%\n"));
    assert!(text.contains("- [anormal] latency: 4 (>3.5)\n"));
    assert!(text.contains("- [normal] latency: 3.9 (>4.5)\n"));
    assert!(!text.contains("Diagnósticos diferenciales"));
    assert!(text.contains("#### Neuroconducción Sensitiva del Nervio Mediano\n- latency: 4\n"));
    // Tests the catalog does not know keep their raw name.
    assert!(text.contains("#### customTest\n- value: 1.5\n"));
}

#[test]
fn renders_differentials_when_present() {
    let catalog = PatternCatalog::builtin();
    let measurements = MeasurementSet::new()
        .with("medianSensory", "latency", 4.0)
        .with("ulnarMotor", "velocity", 40.0);
    let result = analyze(&measurements, "carpaTunnel", catalog).unwrap();

    let text = to_structured_input(&result, &measurements, catalog);
    assert!(text.contains("### Diagnósticos diferenciales\n"));
    assert!(text.contains(
        "- Neuropatía cubital en el codo (100%): Coincide con 1 de los hallazgos clave para este diagnóstico.\n"
    ));
}

#[test]
fn renders_combined_sensory_index_when_complete() {
    let catalog = PatternCatalog::builtin();
    let measurements = MeasurementSet::new()
        .with("medianSensory", "latency", 4.0)
        .with("combinedIndex", "palmDiff", 0.5)
        .with("combinedIndex", "ringDiff", 0.25)
        .with("combinedIndex", "thumbDiff", 0.25);
    let result = analyze(&measurements, "carpaTunnel", catalog).unwrap();

    let text = to_structured_input(&result, &measurements, catalog);
    assert!(text.contains(
        "### Índices calculados\n**Índice Sensorial Combinado:** 1 ms\n- PALMDIFF: 0.5 ms\n"
    ));
    assert!(text.ends_with("posible neuropatía del nervio mediano.\n"));

    let partial = MeasurementSet::new()
        .with("medianSensory", "latency", 4.0)
        .with("combinedIndex", "palmDiff", 0.5);
    let text = to_structured_input(&result, &partial, catalog);
    assert!(!text.contains("Índices calculados"));
}
