use enmg_core::models::pattern::{CategoryEntry, DiagnosticCategory};

fn category(id: &str, name: &str, diagnoses: &[(&str, &str)]) -> DiagnosticCategory {
    DiagnosticCategory {
        id: id.to_string(),
        name: name.to_string(),
        diagnoses: diagnoses
            .iter()
            .map(|(id, name)| CategoryEntry {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}

pub(super) fn all() -> Vec<DiagnosticCategory> {
    vec![
        category(
            "mononeuropatias",
            "Neuropatías Focales (Mononeuropatías)",
            &[
                ("carpaTunnel", "Síndrome del túnel del carpo"),
                ("ulnarElbow", "Neuropatía cubital en el codo"),
                // Selectable, but has no scoring pattern yet.
                ("radialNerve", "Neuropatía radial"),
            ],
        ),
        category(
            "polineuropatias",
            "Polineuropatías",
            &[
                ("diabeticPoly", "Polineuropatía diabética"),
                ("cidp", "Polineuropatía inflamatoria desmielinizante crónica"),
            ],
        ),
    ]
}
