use enmg_core::error::CoreError;
use thiserror::Error;

/// Problems found while building a [`PatternCatalog`](crate::catalog::PatternCatalog).
///
/// These are authoring bugs in catalog data and surface at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate pattern id: {0}")]
    DuplicatePattern(String),

    #[error("duplicate protocol step id: {0}")]
    DuplicateProtocolStep(String),

    #[error("pattern '{0}' has no key findings")]
    NoFindings(String),

    #[error("pattern '{pattern_id}', key finding {index}: {source}")]
    InvalidFinding {
        pattern_id: String,
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error("catalog parse error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown diagnostic pattern: {0}")]
    UnknownPattern(String),

    #[error("pattern '{0}' has no key finding that can be evaluated against the given measurements")]
    UnscoreablePattern(String),

    #[error("min_differential_probability must be in [0, 1), got {0}")]
    InvalidThreshold(f64),

    #[error("importance weights must be positive, got high={high} medium={medium}")]
    InvalidWeights { high: u32, medium: u32 },
}

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("unknown nerve: {0}")]
    UnknownNerve(String),
}
