use enmg_core::models::analysis::FindingResult;
use enmg_core::models::finding::Importance;
use enmg_core::models::measurement::MeasurementSet;
use enmg_core::models::pattern::DiagnosticPattern;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::evaluate::{evaluate, resolve};

/// Points a key finding contributes, by importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportanceWeights {
    pub high: u32,
    pub medium: u32,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self { high: 2, medium: 1 }
    }
}

impl ImportanceWeights {
    /// Both weights must be positive.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.high == 0 || self.medium == 0 {
            return Err(AnalysisError::InvalidWeights {
                high: self.high,
                medium: self.medium,
            });
        }
        Ok(())
    }

    pub fn weight(&self, importance: Importance) -> u32 {
        match importance {
            Importance::High => self.high,
            Importance::Medium => self.medium,
        }
    }
}

/// Weighted match of one pattern against one measurement set.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternScore {
    /// Weight of the findings whose condition held.
    pub achieved: u64,
    /// Weight of every finding that could be resolved.
    pub max_possible: u64,
    /// Number of findings whose condition held.
    pub matched: usize,
    /// `achieved / max_possible`, within `[0, 1]`.
    pub probability: f64,
    /// One entry per resolved finding, in declaration order.
    pub findings: Vec<FindingResult>,
}

/// Score a pattern.
///
/// Findings whose measurement is absent are skipped entirely: they add to
/// neither `achieved` nor `max_possible`. A pattern with no resolvable
/// finding cannot be scored and yields [`AnalysisError::UnscoreablePattern`].
/// Weights are summed as `u64`, so any `u32` weights fit.
pub fn score(
    measurements: &MeasurementSet,
    pattern: &DiagnosticPattern,
    weights: &ImportanceWeights,
) -> Result<PatternScore, AnalysisError> {
    let mut achieved = 0u64;
    let mut max_possible = 0u64;
    let mut matched = 0usize;
    let mut findings = Vec::with_capacity(pattern.key_findings.len());

    for finding in &pattern.key_findings {
        let Some(value) = resolve(measurements, finding) else {
            tracing::trace!(
                pattern = %pattern.id,
                parameter = %finding.parameter,
                "no measurement for key finding, skipped"
            );
            continue;
        };

        let met = evaluate(value, &finding.condition);
        let weight = u64::from(weights.weight(finding.importance));
        max_possible += weight;
        if met {
            achieved += weight;
            matched += 1;
        }

        findings.push(FindingResult {
            description: format!(
                "{}: {} ({})",
                finding.parameter.param(),
                value,
                finding.condition
            ),
            abnormal: met,
        });
    }

    if findings.is_empty() {
        return Err(AnalysisError::UnscoreablePattern(pattern.id.clone()));
    }

    // Zero weights only get here when the caller skipped validation.
    let probability = if max_possible == 0 {
        0.0
    } else {
        (achieved as f64 / max_possible as f64).clamp(0.0, 1.0)
    };

    Ok(PatternScore {
        achieved,
        max_possible,
        matched,
        probability,
        findings,
    })
}
