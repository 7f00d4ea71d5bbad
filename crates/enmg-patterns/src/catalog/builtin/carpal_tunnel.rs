use crate::catalog::definition::{FindingDefinition, PatternDefinition};

/// Carpal tunnel syndrome: prolonged median sensory and distal motor
/// latencies, reduced sensory amplitude.
pub(super) fn pattern() -> PatternDefinition {
    PatternDefinition::new(
        "carpaTunnel",
        "Síndrome del túnel del carpo",
        &["medianSensory", "medianMotor"],
        vec![
            FindingDefinition::new("medianSensory.latency", ">3.5", "high"),
            FindingDefinition::new("medianSensory.amplitude", "<20", "high"),
            FindingDefinition::new("medianMotor.latency", ">4.5", "high"),
        ],
    )
}
