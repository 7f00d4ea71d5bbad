use enmg_core::models::analysis::DifferentialResult;
use enmg_core::models::measurement::MeasurementSet;

use crate::analyze::AnalysisOptions;
use crate::catalog::PatternCatalog;
use crate::scoring::score;

const FALLBACK_REASON: &str = "Algunos hallazgos son compatibles con este diagnóstico.";

/// Score every catalog pattern except `exclude_id` and keep the ones above
/// `options.min_differential_probability`.
///
/// The threshold is strict: a candidate exactly at it is dropped. Results
/// are sorted by descending probability; the sort is stable so equal
/// probabilities keep catalog order. Candidates with no resolvable finding
/// are left out. `options` are expected to have passed
/// [`AnalysisOptions::validate`].
pub fn rank_differentials(
    measurements: &MeasurementSet,
    exclude_id: &str,
    catalog: &PatternCatalog,
    options: &AnalysisOptions,
) -> Vec<DifferentialResult> {
    let mut differentials: Vec<DifferentialResult> = catalog
        .iter()
        .filter(|pattern| pattern.id != exclude_id)
        .filter_map(|pattern| match score(measurements, pattern, &options.weights) {
            Ok(scored) => Some((pattern, scored)),
            Err(e) => {
                tracing::debug!(pattern = %pattern.id, "differential candidate skipped: {e}");
                None
            }
        })
        .filter(|(_, scored)| scored.probability > options.min_differential_probability)
        .map(|(pattern, scored)| DifferentialResult {
            id: pattern.id.clone(),
            name: pattern.name.clone(),
            probability: scored.probability,
            reason: reason(scored.matched),
        })
        .collect();

    differentials.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    differentials
}

/// Explanation attached to a differential that matched `matched` findings.
pub fn reason(matched: usize) -> String {
    if matched > 0 {
        format!("Coincide con {matched} de los hallazgos clave para este diagnóstico.")
    } else {
        FALLBACK_REASON.to_string()
    }
}
