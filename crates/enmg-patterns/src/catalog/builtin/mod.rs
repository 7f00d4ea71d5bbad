//! Compiled-in catalog data.

mod carpal_tunnel;
mod categories;
mod cidp;
mod diabetic_polyneuropathy;
mod protocol_steps;
mod ulnar_elbow;

use super::definition::CatalogDefinition;

/// Raw definition of the built-in catalog. Pattern order here is the
/// tie-break order for differentials.
pub fn definition() -> CatalogDefinition {
    CatalogDefinition {
        patterns: vec![
            carpal_tunnel::pattern(),
            ulnar_elbow::pattern(),
            diabetic_polyneuropathy::pattern(),
            cidp::pattern(),
        ],
        protocol_steps: protocol_steps::all(),
        categories: categories::all(),
    }
}
