use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::finding::KeyFinding;
use super::reference::ReferenceRange;

/// A diagnosis together with the rules that characterise it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosticPattern {
    pub id: String,
    pub name: String,
    /// Ids of the study steps whose measurements this pattern needs, in
    /// the order they are collected.
    pub protocol_steps: Vec<String>,
    pub key_findings: Vec<KeyFinding>,
}

/// One step of a study protocol (a single nerve test).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProtocolStep {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub reference_values: BTreeMap<String, ReferenceRange>,
}

/// A group of related diagnoses, used for selection lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticCategory {
    pub id: String,
    pub name: String,
    pub diagnoses: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
}
