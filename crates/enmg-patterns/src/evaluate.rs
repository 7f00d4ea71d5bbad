//! Condition evaluation against resolved measurements.

use enmg_core::error::CoreError;
use enmg_core::models::finding::{Condition, KeyFinding, Operator};
use enmg_core::models::measurement::MeasurementSet;

/// Apply a condition to a measured value.
///
/// `=` compares with exact float equality.
pub fn evaluate(value: f64, condition: &Condition) -> bool {
    match condition.operator {
        Operator::GreaterThan => value > condition.threshold,
        Operator::LessThan => value < condition.threshold,
        Operator::Equal => value == condition.threshold,
    }
}

/// [`evaluate`] for a condition still in its `<operator><number>` form.
pub fn evaluate_str(value: f64, condition: &str) -> Result<bool, CoreError> {
    let condition: Condition = condition.parse()?;
    Ok(evaluate(value, &condition))
}

/// The value a finding's parameter path points at, if it was measured.
pub fn resolve(measurements: &MeasurementSet, finding: &KeyFinding) -> Option<f64> {
    measurements.resolve(&finding.parameter)
}

/// `Some(true)` when the finding's measurement exists and meets the
/// condition, `Some(false)` when it exists and does not, `None` when it was
/// never measured.
pub fn check(measurements: &MeasurementSet, finding: &KeyFinding) -> Option<bool> {
    resolve(measurements, finding).map(|value| evaluate(value, &finding.condition))
}
