//! enmg-cli
//!
//! Host binary for the pattern engine: reads measurement and catalog files,
//! applies the user config, prints results.

pub mod cli;
pub mod commands;
pub mod config;
