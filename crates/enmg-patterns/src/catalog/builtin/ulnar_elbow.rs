use crate::catalog::definition::{FindingDefinition, PatternDefinition};

/// Ulnar neuropathy at the elbow.
pub(super) fn pattern() -> PatternDefinition {
    PatternDefinition::new(
        "ulnarElbow",
        "Neuropatía cubital en el codo",
        &["ulnarSensory", "ulnarMotor"],
        vec![
            FindingDefinition::new("ulnarMotor.velocity", "<50", "high"),
            FindingDefinition::new("ulnarSensory.amplitude", "<15", "medium"),
        ],
    )
}
