//! Structured text rendering of an analysis, used as the data payload for
//! the report-writing model.

use enmg_core::models::analysis::AnalysisResult;
use enmg_core::models::measurement::MeasurementSet;

use crate::catalog::PatternCatalog;
use crate::reference::combined_sensory_index_from;

fn percent(probability: f64) -> String {
    format!("{:.0}%", probability * 100.0)
}

/// Format an analysis and the measurements behind it as Markdown.
///
/// Measurements are grouped per test, titled with the protocol step name
/// when the catalog defines one. The differentials section is omitted when
/// there are none, and the calculated indices section unless the combined
/// sensory index was fully measured.
pub fn to_structured_input(
    result: &AnalysisResult,
    measurements: &MeasurementSet,
    catalog: &PatternCatalog,
) -> String {
    let primary = &result.primary;
    let mut output = format!("## Diagnóstico principal: {}\n\n", primary.name);
    output.push_str(&format!("Probabilidad: {}\n\n", percent(primary.probability)));

    output.push_str("### Hallazgos clave\n");
    for finding in &primary.key_findings {
        let flag = if finding.abnormal { "anormal" } else { "normal" };
        output.push_str(&format!("- [{flag}] {}\n", finding.description));
    }
    output.push('\n');

    if !result.differentials.is_empty() {
        output.push_str("### Diagnósticos diferenciales\n");
        for differential in &result.differentials {
            output.push_str(&format!(
                "- {} ({}): {}\n",
                differential.name,
                percent(differential.probability),
                differential.reason
            ));
        }
        output.push('\n');
    }

    output.push_str("### Mediciones\n");
    for (test, params) in measurements.tests() {
        let title = catalog
            .protocol_step(test)
            .map(|step| step.name.as_str())
            .unwrap_or(test);
        output.push_str(&format!("#### {title}\n"));
        for (param, value) in params {
            output.push_str(&format!("- {param}: {value}\n"));
        }
    }

    if let Some(index) = combined_sensory_index_from(measurements) {
        let components = &index.components;
        output.push_str("\n### Índices calculados\n");
        output.push_str(&format!(
            "**Índice Sensorial Combinado:** {} ms\n",
            index.value
        ));
        output.push_str(&format!("- PALMDIFF: {} ms\n", components.palm_diff));
        output.push_str(&format!("- RINGDIFF: {} ms\n", components.ring_diff));
        output.push_str(&format!("- THUMBDIFF: {} ms\n", components.thumb_diff));
        output.push_str(&format!("{}\n", index.interpretation));
    }
    output
}
