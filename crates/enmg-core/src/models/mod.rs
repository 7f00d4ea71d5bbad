pub mod analysis;
pub mod finding;
pub mod measurement;
pub mod nerve;
pub mod pattern;
pub mod reference;
