use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of one resolvable key finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingResult {
    /// `"<param>: <value> (<condition>)"`, e.g. `"latency: 4 (>3.5)"`.
    pub description: String,
    /// Whether the measured value matches the pattern's abnormal signature.
    pub abnormal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrimaryDiagnosisResult {
    pub id: String,
    pub name: String,
    /// Weighted match in `[0, 1]`.
    pub probability: f64,
    pub key_findings: Vec<FindingResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DifferentialResult {
    pub id: String,
    pub name: String,
    pub probability: f64,
    pub reason: String,
}

/// The primary diagnosis and its ranked differentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub primary: PrimaryDiagnosisResult,
    /// Descending by probability; equal probabilities keep catalog order.
    pub differentials: Vec<DifferentialResult>,
}
