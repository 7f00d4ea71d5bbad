use crate::catalog::definition::{FindingDefinition, PatternDefinition};

/// CIDP: diffuse motor slowing into the demyelinating range (< 38 m/s).
pub(super) fn pattern() -> PatternDefinition {
    let findings = ["medianMotor", "ulnarMotor", "tibialMotor", "peronealMotor"]
        .iter()
        .map(|test| FindingDefinition::new(&format!("{test}.velocity"), "<38", "high"))
        .collect();

    PatternDefinition::new(
        "cidp",
        "Polineuropatía inflamatoria desmielinizante crónica",
        &["medianMotor", "ulnarMotor", "tibialMotor", "peronealMotor"],
        findings,
    )
}
