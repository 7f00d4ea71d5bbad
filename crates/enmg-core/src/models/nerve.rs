use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::reference::ReferenceRange;

/// Conduction values recorded for a single nerve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NerveMeasurement {
    /// Milliseconds.
    pub latency: f64,
    /// Metres per second.
    pub velocity: f64,
    /// Millivolts.
    pub amplitude: f64,
}

/// Normal conduction ranges for a nerve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NerveReference {
    pub name: String,
    pub latency: ReferenceRange,
    pub velocity: ReferenceRange,
    pub amplitude: ReferenceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NerveStatus {
    Normal,
    Abnormal,
}

/// Interpretation of one nerve's conduction study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NerveInterpretation {
    /// Display name of the nerve, e.g. "Nervio Mediano".
    pub nerve: String,
    pub measurements: NerveMeasurement,
    pub interpretation: Vec<String>,
    pub status: NerveStatus,
}

/// Median-versus-ulnar/radial latency differences, in ms, that sum to the
/// combined sensory index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CombinedIndexComponents {
    pub palm_diff: f64,
    pub ring_diff: f64,
    pub thumb_diff: f64,
}

impl CombinedIndexComponents {
    pub fn sum(&self) -> f64 {
        self.palm_diff + self.ring_diff + self.thumb_diff
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CombinedSensoryIndex {
    /// Sum of the components, in ms.
    pub value: f64,
    pub components: CombinedIndexComponents,
    /// Upper normal limit the value was compared against.
    pub max: f64,
    pub status: NerveStatus,
    pub interpretation: String,
}
