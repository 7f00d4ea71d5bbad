use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::finding::ParameterPath;

/// Measurements collected during one study session.
///
/// Keyed by test name (`medianMotor`), then parameter name (`latency`).
/// A combination that was never entered is absent; a stored `0.0` is a
/// real measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementSet(BTreeMap<String, BTreeMap<String, f64>>);

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a single measurement.
    pub fn get(&self, test: &str, param: &str) -> Option<f64> {
        self.0.get(test)?.get(param).copied()
    }

    /// Look up the measurement a dotted parameter path points at.
    pub fn resolve(&self, path: &ParameterPath) -> Option<f64> {
        self.get(path.test(), path.param())
    }

    /// Record a measurement, returning the value it replaced.
    pub fn insert(
        &mut self,
        test: impl Into<String>,
        param: impl Into<String>,
        value: f64,
    ) -> Option<f64> {
        self.0
            .entry(test.into())
            .or_default()
            .insert(param.into(), value)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, test: impl Into<String>, param: impl Into<String>, value: f64) -> Self {
        self.insert(test, param, value);
        self
    }

    /// Remove a measurement. A test left with no parameters is dropped.
    pub fn remove(&mut self, test: &str, param: &str) -> Option<f64> {
        let params = self.0.get_mut(test)?;
        let removed = params.remove(param);
        if params.is_empty() {
            self.0.remove(test);
        }
        removed
    }

    /// Parameters recorded for one test, in name order.
    pub fn test(&self, test: &str) -> Option<&BTreeMap<String, f64>> {
        self.0.get(test)
    }

    /// All tests with their parameters, in name order.
    pub fn tests(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, f64>)> {
        self.0.iter().map(|(name, params)| (name.as_str(), params))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Total number of recorded values across all tests.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }
}

impl From<BTreeMap<String, BTreeMap<String, f64>>> for MeasurementSet {
    fn from(map: BTreeMap<String, BTreeMap<String, f64>>) -> Self {
        Self(map)
    }
}
