//! Authoring form of a catalog.
//!
//! Conditions, parameter paths and importances are plain strings here, the
//! way they are written in JSON catalog files. [`PatternCatalog`] turns them
//! into typed values and rejects anything that does not parse.
//!
//! [`PatternCatalog`]: super::PatternCatalog

use enmg_core::models::pattern::{DiagnosticCategory, ProtocolStep};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDefinition {
    pub patterns: Vec<PatternDefinition>,
    #[serde(default)]
    pub protocol_steps: Vec<ProtocolStep>,
    #[serde(default)]
    pub categories: Vec<DiagnosticCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub protocol_steps: Vec<String>,
    pub key_findings: Vec<FindingDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingDefinition {
    /// `<test>.<param>`
    pub parameter: String,
    /// `<operator><number>`, e.g. `>3.5`
    pub condition: String,
    /// `high` or `medium`
    pub importance: String,
}

impl FindingDefinition {
    pub fn new(parameter: &str, condition: &str, importance: &str) -> Self {
        Self {
            parameter: parameter.to_string(),
            condition: condition.to_string(),
            importance: importance.to_string(),
        }
    }
}

impl PatternDefinition {
    pub fn new(
        id: &str,
        name: &str,
        protocol_steps: &[&str],
        key_findings: Vec<FindingDefinition>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            protocol_steps: protocol_steps.iter().map(|s| s.to_string()).collect(),
            key_findings,
        }
    }
}
