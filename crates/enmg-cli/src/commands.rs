use std::borrow::Cow;
use std::path::Path;

use enmg_core::models::measurement::MeasurementSet;
use enmg_core::models::nerve::{CombinedIndexComponents, NerveMeasurement};
use enmg_patterns::reference::{combined_sensory_index, interpret_nerve};
use enmg_patterns::structured::to_structured_input;
use enmg_patterns::{Analyzer, PatternCatalog};
use eyre::WrapErr;

use crate::cli::{AnalyzeArgs, CombinedIndexArgs, InterpretArgs, PatternsArgs};
use crate::config::{self, EnmgConfig};

pub fn load_measurements(path: &Path) -> eyre::Result<MeasurementSet> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read measurements at {}", path.display()))?;
    let measurements: MeasurementSet = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("invalid measurement set in {}", path.display()))?;
    tracing::debug!(path = %path.display(), values = measurements.len(), "measurements loaded");
    Ok(measurements)
}

/// The catalog at `path`, or the built-in one when there is none.
pub fn load_catalog(path: Option<&Path>) -> eyre::Result<Cow<'static, PatternCatalog>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(PatternCatalog::builtin()));
    };
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read catalog at {}", path.display()))?;
    let catalog = PatternCatalog::from_json(&contents)
        .wrap_err_with(|| format!("invalid catalog in {}", path.display()))?;
    tracing::info!(path = %path.display(), patterns = catalog.len(), "catalog loaded");
    Ok(Cow::Owned(catalog))
}

pub fn analyze(args: &AnalyzeArgs, config: &EnmgConfig) -> eyre::Result<String> {
    let catalog_path = args.catalog.as_deref().or(config.catalog_path.as_deref());
    let catalog = load_catalog(catalog_path)?;
    let measurements = load_measurements(&args.measurements)?;

    let mut options = config.analysis_options();
    if let Some(min) = args.min_probability {
        options.min_differential_probability = min;
    }

    let analyzer =
        Analyzer::with_options(&catalog, options).wrap_err("invalid analysis options")?;
    let result = analyzer
        .analyze(&measurements, &args.diagnosis)
        .wrap_err_with(|| format!("cannot analyze diagnosis '{}'", args.diagnosis))?;

    if args.structured {
        Ok(to_structured_input(&result, &measurements, &catalog))
    } else {
        Ok(serde_json::to_string_pretty(&result)?)
    }
}

pub fn patterns(args: &PatternsArgs, config: &EnmgConfig) -> eyre::Result<String> {
    let catalog_path = args.catalog.as_deref().or(config.catalog_path.as_deref());
    let catalog = load_catalog(catalog_path)?;
    Ok(serde_json::to_string_pretty(&*catalog)?)
}

pub fn interpret(args: &InterpretArgs) -> eyre::Result<String> {
    let measurements = NerveMeasurement {
        latency: args.latency,
        velocity: args.velocity,
        amplitude: args.amplitude,
    };
    let interpretation = interpret_nerve(&args.nerve, measurements)?;
    Ok(serde_json::to_string_pretty(&interpretation)?)
}

pub fn combined_index(args: &CombinedIndexArgs) -> eyre::Result<String> {
    let index = combined_sensory_index(CombinedIndexComponents {
        palm_diff: args.palm_diff,
        ring_diff: args.ring_diff,
        thumb_diff: args.thumb_diff,
    });
    Ok(serde_json::to_string_pretty(&index)?)
}

pub fn show_config(config: &EnmgConfig) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Write a default config to `path` unless one is already there.
pub fn init_config(path: &Path) -> eyre::Result<String> {
    if path.exists() {
        return Ok(format!("config already exists at {}", path.display()));
    }
    config::save_config(path, &EnmgConfig::default())?;
    Ok(format!("wrote default config to {}", path.display()))
}
