use enmg_core::models::analysis::{AnalysisResult, PrimaryDiagnosisResult};
use enmg_core::models::measurement::MeasurementSet;
use serde::{Deserialize, Serialize};

use crate::catalog::PatternCatalog;
use crate::differential::rank_differentials;
use crate::error::AnalysisError;
use crate::scoring::{ImportanceWeights, score};

/// Differentials at or below this probability are not reported.
pub const DEFAULT_MIN_DIFFERENTIAL_PROBABILITY: f64 = 0.3;

/// Tunable engine parameters. Defaults reproduce the clinical behaviour
/// the catalog was authored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub min_differential_probability: f64,
    pub weights: ImportanceWeights,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_differential_probability: DEFAULT_MIN_DIFFERENTIAL_PROBABILITY,
            weights: ImportanceWeights::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn new(
        min_differential_probability: f64,
        weights: ImportanceWeights,
    ) -> Result<Self, AnalysisError> {
        let options = Self {
            min_differential_probability,
            weights,
        };
        options.validate()?;
        Ok(options)
    }

    /// The threshold must lie in `[0, 1)` and both weights must be positive.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(0.0..1.0).contains(&self.min_differential_probability) {
            return Err(AnalysisError::InvalidThreshold(
                self.min_differential_probability,
            ));
        }
        self.weights.validate()
    }
}

/// Runs analyses against one catalog with fixed options.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    catalog: &'a PatternCatalog,
    options: AnalysisOptions,
}

impl<'a> Analyzer<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self {
            catalog,
            options: AnalysisOptions::default(),
        }
    }

    /// Errors if `options` fails [`AnalysisOptions::validate`].
    pub fn with_options(
        catalog: &'a PatternCatalog,
        options: AnalysisOptions,
    ) -> Result<Self, AnalysisError> {
        options.validate()?;
        Ok(Self { catalog, options })
    }

    pub fn catalog(&self) -> &'a PatternCatalog {
        self.catalog
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Score `primary_id` and rank every other pattern as a differential.
    ///
    /// Errors if the primary is not in the catalog, or if none of its key
    /// findings has a measurement.
    pub fn analyze(
        &self,
        measurements: &MeasurementSet,
        primary_id: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let pattern = self
            .catalog
            .get(primary_id)
            .ok_or_else(|| AnalysisError::UnknownPattern(primary_id.to_string()))?;

        let scored = score(measurements, pattern, &self.options.weights)?;
        let differentials =
            rank_differentials(measurements, primary_id, self.catalog, &self.options);

        tracing::debug!(
            primary = %pattern.id,
            probability = scored.probability,
            differentials = differentials.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            primary: PrimaryDiagnosisResult {
                id: pattern.id.clone(),
                name: pattern.name.clone(),
                probability: scored.probability,
                key_findings: scored.findings,
            },
            differentials,
        })
    }
}

/// [`Analyzer::analyze`] with default options.
pub fn analyze(
    measurements: &MeasurementSet,
    primary_id: &str,
    catalog: &PatternCatalog,
) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new(catalog).analyze(measurements, primary_id)
}
