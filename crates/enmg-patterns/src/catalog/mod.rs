//! The validated, immutable registry of diagnostic patterns.

pub mod builtin;
pub mod definition;

use std::collections::HashSet;
use std::sync::LazyLock;

use enmg_core::error::CoreError;
use enmg_core::models::finding::KeyFinding;
use enmg_core::models::pattern::{DiagnosticCategory, DiagnosticPattern, ProtocolStep};
use serde::Serialize;

use crate::error::CatalogError;
use definition::{CatalogDefinition, FindingDefinition, PatternDefinition};

/// Diagnostic patterns, protocol steps and categories, in declaration order.
///
/// Only constructible through validation, and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCatalog {
    patterns: Vec<DiagnosticPattern>,
    protocol_steps: Vec<ProtocolStep>,
    categories: Vec<DiagnosticCategory>,
}

static BUILTIN: LazyLock<PatternCatalog> = LazyLock::new(|| {
    PatternCatalog::from_definition(builtin::definition())
        .unwrap_or_else(|e| panic!("built-in pattern catalog is invalid: {e}"))
});

impl PatternCatalog {
    /// The catalog shipped with the application.
    ///
    /// # Panics
    ///
    /// Panics on first access if the compiled-in definitions fail
    /// validation. That can only be a data bug in [`builtin`].
    pub fn builtin() -> &'static PatternCatalog {
        &BUILTIN
    }

    /// Validate raw definitions into a catalog.
    ///
    /// Fails on the first duplicate id, empty finding list, or finding whose
    /// parameter path, condition or importance does not parse.
    pub fn from_definitions(
        patterns: Vec<PatternDefinition>,
        protocol_steps: Vec<ProtocolStep>,
        categories: Vec<DiagnosticCategory>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            if !seen.insert(pattern.id.clone()) {
                return Err(CatalogError::DuplicatePattern(pattern.id));
            }
            validated.push(validate_pattern(pattern)?);
        }

        let mut seen_steps = HashSet::new();
        for step in &protocol_steps {
            if !seen_steps.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateProtocolStep(step.id.clone()));
            }
        }

        if !protocol_steps.is_empty() {
            for pattern in &validated {
                for step_id in &pattern.protocol_steps {
                    if !seen_steps.contains(step_id.as_str()) {
                        tracing::warn!(
                            pattern = %pattern.id,
                            step = %step_id,
                            "pattern references a protocol step the catalog does not define"
                        );
                    }
                }
            }
        }

        tracing::debug!(
            patterns = validated.len(),
            protocol_steps = protocol_steps.len(),
            categories = categories.len(),
            "pattern catalog loaded"
        );

        Ok(Self {
            patterns: validated,
            protocol_steps,
            categories,
        })
    }

    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        Self::from_definitions(
            definition.patterns,
            definition.protocol_steps,
            definition.categories,
        )
    }

    /// Parse and validate a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }

    /// Look up a pattern by id.
    pub fn get(&self, id: &str) -> Option<&DiagnosticPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Patterns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticPattern> {
        self.patterns.iter()
    }

    pub fn patterns(&self) -> &[DiagnosticPattern] {
        &self.patterns
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn protocol_steps(&self) -> &[ProtocolStep] {
        &self.protocol_steps
    }

    pub fn protocol_step(&self, id: &str) -> Option<&ProtocolStep> {
        self.protocol_steps.iter().find(|s| s.id == id)
    }

    /// The protocol steps a pattern needs, in collection order. Step ids the
    /// catalog does not define are left out.
    pub fn protocol_steps_for<'a>(
        &'a self,
        pattern: &'a DiagnosticPattern,
    ) -> impl Iterator<Item = &'a ProtocolStep> + 'a {
        pattern
            .protocol_steps
            .iter()
            .filter_map(move |id| self.protocol_step(id))
    }

    pub fn categories(&self) -> &[DiagnosticCategory] {
        &self.categories
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a DiagnosticPattern;
    type IntoIter = std::slice::Iter<'a, DiagnosticPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

fn validate_pattern(pattern: PatternDefinition) -> Result<DiagnosticPattern, CatalogError> {
    if pattern.key_findings.is_empty() {
        return Err(CatalogError::NoFindings(pattern.id));
    }

    let mut key_findings = Vec::with_capacity(pattern.key_findings.len());
    for (index, finding) in pattern.key_findings.iter().enumerate() {
        let parsed = parse_finding(finding).map_err(|source| CatalogError::InvalidFinding {
            pattern_id: pattern.id.clone(),
            index,
            source,
        })?;
        key_findings.push(parsed);
    }

    Ok(DiagnosticPattern {
        id: pattern.id,
        name: pattern.name,
        protocol_steps: pattern.protocol_steps,
        key_findings,
    })
}

fn parse_finding(finding: &FindingDefinition) -> Result<KeyFinding, CoreError> {
    Ok(KeyFinding {
        parameter: finding.parameter.parse()?,
        condition: finding.condition.parse()?,
        importance: finding.importance.parse()?,
    })
}
