//! enmg-patterns
//!
//! The diagnostic pattern-matching engine. Pure computation, no I/O.
//! Holds the pattern catalog, evaluates key findings against a
//! measurement set, scores the selected diagnosis and ranks the rest of
//! the catalog as differentials.

pub mod analyze;
pub mod catalog;
pub mod differential;
pub mod error;
pub mod evaluate;
pub mod reference;
pub mod scoring;
pub mod structured;

pub use analyze::{AnalysisOptions, Analyzer, analyze};
pub use catalog::PatternCatalog;
