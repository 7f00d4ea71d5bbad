//! enmg-core
//!
//! Pure domain types for electrodiagnostic studies: measurement sets,
//! diagnostic rule vocabulary, and analysis results. No engine logic lives
//! here; this is the shared vocabulary of the ENMG system.

pub mod error;
pub mod models;
