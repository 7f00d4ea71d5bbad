use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive normal range for a measured parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

/// Where a value falls relative to a [`ReferenceRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RangePosition {
    Below,
    Within,
    Above,
}

impl ReferenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.position(value) == RangePosition::Within
    }

    pub fn position(&self, value: f64) -> RangePosition {
        if value < self.min {
            RangePosition::Below
        } else if value > self.max {
            RangePosition::Above
        } else {
            RangePosition::Within
        }
    }
}

/// A measured value outside its protocol step's reference range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OutOfRange {
    pub step_id: String,
    pub param: String,
    pub value: f64,
    pub range: ReferenceRange,
    pub position: RangePosition,
}
