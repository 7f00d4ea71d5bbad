//! Per-nerve conduction interpretation, the combined sensory index and
//! protocol reference checks.

use std::sync::LazyLock;

use enmg_core::models::measurement::MeasurementSet;
use enmg_core::models::nerve::{
    CombinedIndexComponents, CombinedSensoryIndex, NerveInterpretation, NerveMeasurement,
    NerveReference, NerveStatus,
};
use enmg_core::models::reference::{OutOfRange, RangePosition, ReferenceRange};

use crate::catalog::PatternCatalog;
use crate::error::ReferenceError;

static NERVE_REFERENCES: LazyLock<Vec<(&'static str, NerveReference)>> = LazyLock::new(|| {
    let nerve = |name: &str, latency: (f64, f64), velocity: (f64, f64), amplitude: (f64, f64)| {
        NerveReference {
            name: name.to_string(),
            latency: ReferenceRange::new(latency.0, latency.1),
            velocity: ReferenceRange::new(velocity.0, velocity.1),
            amplitude: ReferenceRange::new(amplitude.0, amplitude.1),
        }
    };

    vec![
        ("mediano", nerve("Nervio Mediano", (2.5, 4.5), (45.0, 65.0), (4.0, 20.0))),
        ("cubital", nerve("Nervio Cubital", (2.0, 4.0), (45.0, 65.0), (4.0, 20.0))),
        ("peroneo", nerve("Nervio Peroneo", (3.0, 5.5), (40.0, 60.0), (2.0, 10.0))),
        ("tibial", nerve("Nervio Tibial", (3.5, 6.0), (40.0, 60.0), (3.0, 15.0))),
        ("sural", nerve("Nervio Sural", (2.5, 4.0), (40.0, 60.0), (10.0, 50.0))),
        ("radial", nerve("Nervio Radial", (2.5, 4.5), (45.0, 65.0), (5.0, 25.0))),
    ]
});

/// Reference ranges for a nerve id (`mediano`, `cubital`, ...).
pub fn nerve_reference(nerve: &str) -> Option<&'static NerveReference> {
    NERVE_REFERENCES
        .iter()
        .find(|(id, _)| *id == nerve)
        .map(|(_, reference)| reference)
}

pub fn nerve_ids() -> impl Iterator<Item = &'static str> {
    NERVE_REFERENCES.iter().map(|(id, _)| *id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parameter {
    Latency,
    Velocity,
    Amplitude,
}

struct ParameterReading {
    message: String,
    abnormal: bool,
}

fn read_parameter(parameter: Parameter, value: f64, range: &ReferenceRange) -> ParameterReading {
    let position = range.position(value);
    let message = match (parameter, position) {
        (Parameter::Latency, RangePosition::Above) => {
            format!("Latencia prolongada ({value} ms): posible neuropatía desmielinizante.")
        }
        (Parameter::Latency, RangePosition::Below) => {
            format!("Latencia reducida ({value} ms): hallazgo inusual, posible hiperexcitabilidad.")
        }
        (Parameter::Latency, RangePosition::Within) => format!("Latencia normal ({value} ms)."),
        (Parameter::Velocity, RangePosition::Below) => format!(
            "Velocidad reducida ({value} m/s): indicativo de neuropatía desmielinizante."
        ),
        (Parameter::Velocity, RangePosition::Above) => {
            format!("Velocidad aumentada ({value} m/s): hallazgo inusual.")
        }
        (Parameter::Velocity, RangePosition::Within) => {
            format!("Velocidad de conducción normal ({value} m/s).")
        }
        (Parameter::Amplitude, RangePosition::Below) => format!(
            "Amplitud reducida ({value} mV): posible neuropatía axonal o bloqueo de conducción."
        ),
        (Parameter::Amplitude, RangePosition::Above) => format!(
            "Amplitud aumentada ({value} mV): posible síndrome de hiperexcitabilidad."
        ),
        (Parameter::Amplitude, RangePosition::Within) => format!("Amplitud normal ({value} mV)."),
    };

    ParameterReading {
        message,
        abnormal: position != RangePosition::Within,
    }
}

/// Interpret one nerve's latency, velocity and amplitude against its
/// reference ranges.
pub fn interpret_nerve(
    nerve: &str,
    measurements: NerveMeasurement,
) -> Result<NerveInterpretation, ReferenceError> {
    let reference =
        nerve_reference(nerve).ok_or_else(|| ReferenceError::UnknownNerve(nerve.to_string()))?;

    let latency = read_parameter(Parameter::Latency, measurements.latency, &reference.latency);
    let velocity = read_parameter(Parameter::Velocity, measurements.velocity, &reference.velocity);
    let amplitude = read_parameter(
        Parameter::Amplitude,
        measurements.amplitude,
        &reference.amplitude,
    );

    let abnormal = latency.abnormal || velocity.abnormal || amplitude.abnormal;
    let mut interpretation = vec![latency.message, velocity.message, amplitude.message];

    if abnormal {
        let name = &reference.name;
        match (latency.abnormal, velocity.abnormal, amplitude.abnormal) {
            (true, true, false) => interpretation.push(format!(
                "El patrón de latencia prolongada y velocidad reducida con amplitud conservada \
                 sugiere una neuropatía predominantemente desmielinizante del {name}."
            )),
            (false, false, true) => interpretation.push(format!(
                "El patrón de amplitud reducida con preservación de latencia y velocidad \
                 sugiere una neuropatía predominantemente axonal del {name}."
            )),
            (true, true, true) => interpretation.push(format!(
                "Hallazgos compatibles con neuropatía mixta (axonal y desmielinizante) del {name}."
            )),
            _ => {}
        }

        if let Some(recommendation) = recommendation(nerve, latency.abnormal, amplitude.abnormal) {
            interpretation.push(recommendation.to_string());
        }
    } else {
        interpretation.push(format!(
            "Todos los parámetros de conducción del {} se encuentran dentro de los rangos normales.",
            reference.name
        ));
    }

    Ok(NerveInterpretation {
        nerve: reference.name.clone(),
        measurements,
        interpretation,
        status: if abnormal {
            NerveStatus::Abnormal
        } else {
            NerveStatus::Normal
        },
    })
}

fn recommendation(
    nerve: &str,
    latency_abnormal: bool,
    amplitude_abnormal: bool,
) -> Option<&'static str> {
    match nerve {
        "mediano" if latency_abnormal => Some(
            "Se recomienda considerar electromiografía complementaria para evaluar posible \
             Síndrome del Túnel Carpiano.",
        ),
        "cubital" if latency_abnormal => Some(
            "Se recomienda evaluar región del codo para descartar compresión del nervio a este nivel.",
        ),
        "peroneo" | "tibial" if amplitude_abnormal => Some(
            "Se recomienda estudio complementario para descartar polineuropatía o radiculopatía lumbar.",
        ),
        _ => None,
    }
}

/// Upper normal limit of the combined sensory index, in ms.
pub const COMBINED_SENSORY_INDEX_MAX: f64 = 0.9;

/// Measurement test holding the `palmDiff`, `ringDiff` and `thumbDiff`
/// components.
pub const COMBINED_INDEX_TEST: &str = "combinedIndex";

/// Sum the three latency differences and compare the total against
/// [`COMBINED_SENSORY_INDEX_MAX`]. Only a total strictly above the limit is
/// abnormal.
pub fn combined_sensory_index(components: CombinedIndexComponents) -> CombinedSensoryIndex {
    let value = components.sum();
    let max = COMBINED_SENSORY_INDEX_MAX;
    let (status, interpretation) = if value > max {
        (
            NerveStatus::Abnormal,
            format!(
                "El índice combinado ({value} ms) es mayor que {max}, lo cual sugiere una \
                 posible neuropatía del nervio mediano."
            ),
        )
    } else {
        (
            NerveStatus::Normal,
            format!("Índice sensorial combinado normal ({value} ms)."),
        )
    };

    CombinedSensoryIndex {
        value,
        components,
        max,
        status,
        interpretation,
    }
}

/// The combined sensory index recorded under [`COMBINED_INDEX_TEST`], or
/// `None` unless all three components were measured.
pub fn combined_sensory_index_from(measurements: &MeasurementSet) -> Option<CombinedSensoryIndex> {
    let params = measurements.test(COMBINED_INDEX_TEST)?;
    let components = CombinedIndexComponents {
        palm_diff: *params.get("palmDiff")?,
        ring_diff: *params.get("ringDiff")?,
        thumb_diff: *params.get("thumbDiff")?,
    };
    Some(combined_sensory_index(components))
}

/// Every measurement that falls outside the reference range its catalog
/// protocol step declares. Tests or parameters without a declared range
/// are ignored.
pub fn out_of_range(measurements: &MeasurementSet, catalog: &PatternCatalog) -> Vec<OutOfRange> {
    let mut flagged = Vec::new();
    for step in catalog.protocol_steps() {
        let Some(params) = measurements.test(&step.id) else {
            continue;
        };
        for (param, range) in &step.reference_values {
            let Some(&value) = params.get(param) else {
                continue;
            };
            let position = range.position(value);
            if position != RangePosition::Within {
                flagged.push(OutOfRange {
                    step_id: step.id.clone(),
                    param: param.clone(),
                    value,
                    range: *range,
                    position,
                });
            }
        }
    }
    flagged
}
