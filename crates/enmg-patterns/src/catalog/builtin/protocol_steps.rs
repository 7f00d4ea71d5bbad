use enmg_core::models::pattern::ProtocolStep;
use enmg_core::models::reference::ReferenceRange;

fn step(id: &str, name: &str, description: &str, ranges: &[(&str, f64, f64)]) -> ProtocolStep {
    ProtocolStep {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        reference_values: ranges
            .iter()
            .map(|(param, min, max)| (param.to_string(), ReferenceRange::new(*min, *max)))
            .collect(),
    }
}

/// Every study step referenced by the built-in patterns.
///
/// Median ranges are the protocol's own; the rest reuse the per-nerve
/// conduction references in [`crate::reference`].
pub(super) fn all() -> Vec<ProtocolStep> {
    vec![
        step(
            "medianSensory",
            "Neuroconducción Sensitiva del Nervio Mediano",
            "Evalúa la latencia y amplitud del potencial sensitivo del nervio mediano",
            &[("latency", 2.5, 3.5), ("amplitude", 20.0, 50.0)],
        ),
        step(
            "medianMotor",
            "Neuroconducción Motora del Nervio Mediano",
            "Evalúa la latencia distal, amplitud y velocidad de conducción motora",
            &[
                ("latency", 2.8, 4.2),
                ("amplitude", 4.0, 20.0),
                ("velocity", 49.0, 65.0),
            ],
        ),
        step(
            "ulnarSensory",
            "Neuroconducción Sensitiva del Nervio Cubital",
            "Evalúa la latencia y amplitud del potencial sensitivo del nervio cubital",
            &[("latency", 2.0, 4.0)],
        ),
        step(
            "ulnarMotor",
            "Neuroconducción Motora del Nervio Cubital",
            "Evalúa la latencia distal, amplitud y velocidad de conducción motora a través del codo",
            &[
                ("latency", 2.0, 4.0),
                ("amplitude", 4.0, 20.0),
                ("velocity", 45.0, 65.0),
            ],
        ),
        step(
            "suralSensory",
            "Neuroconducción Sensitiva del Nervio Sural",
            "Evalúa la latencia, amplitud y velocidad del potencial sensitivo sural",
            &[
                ("latency", 2.5, 4.0),
                ("amplitude", 10.0, 50.0),
                ("velocity", 40.0, 60.0),
            ],
        ),
        step(
            "tibialMotor",
            "Neuroconducción Motora del Nervio Tibial",
            "Evalúa la latencia distal, amplitud y velocidad de conducción motora tibial",
            &[
                ("latency", 3.5, 6.0),
                ("amplitude", 3.0, 15.0),
                ("velocity", 40.0, 60.0),
            ],
        ),
        step(
            "peronealMotor",
            "Neuroconducción Motora del Nervio Peroneo",
            "Evalúa la latencia distal, amplitud y velocidad de conducción motora peronea",
            &[
                ("latency", 3.0, 5.5),
                ("amplitude", 2.0, 10.0),
                ("velocity", 40.0, 60.0),
            ],
        ),
    ]
}
