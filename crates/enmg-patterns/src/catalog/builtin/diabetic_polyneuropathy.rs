use crate::catalog::definition::{FindingDefinition, PatternDefinition};

/// Diabetic polyneuropathy: length-dependent, sural amplitude drops first.
pub(super) fn pattern() -> PatternDefinition {
    PatternDefinition::new(
        "diabeticPoly",
        "Polineuropatía diabética",
        &["suralSensory", "tibialMotor", "peronealMotor"],
        vec![
            FindingDefinition::new("suralSensory.amplitude", "<6", "high"),
            FindingDefinition::new("tibialMotor.velocity", "<40", "high"),
            FindingDefinition::new("peronealMotor.amplitude", "<2", "medium"),
        ],
    )
}
