use std::path::{Path, PathBuf};

use enmg_patterns::AnalysisOptions;
use enmg_patterns::analyze::DEFAULT_MIN_DIFFERENTIAL_PROBABILITY;
use enmg_patterns::scoring::ImportanceWeights;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnmgConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_min_differential_probability")]
    pub min_differential_probability: f64,
    /// Importance weights. Added in v1; older configs get the 2/1 default.
    pub weights: ImportanceWeights,
    /// Alternate catalog to load instead of the built-in one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub catalog_path: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

fn default_min_differential_probability() -> f64 {
    DEFAULT_MIN_DIFFERENTIAL_PROBABILITY
}

impl Default for EnmgConfig {
    fn default() -> Self {
        let options = AnalysisOptions::default();
        Self {
            config_version: CURRENT_VERSION,
            min_differential_probability: options.min_differential_probability,
            weights: options.weights,
            catalog_path: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl EnmgConfig {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            min_differential_probability: self.min_differential_probability,
            weights: self.weights,
        }
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> eyre::Result<()> {
        self.analysis_options().validate()?;
        Ok(())
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("enmg").join("config.json"))
}

/// Load the config at `path`, or `None` if there is no file there.
pub fn load_config(path: &Path) -> eyre::Result<Option<EnmgConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    // Versions past u32 are treated as too new rather than truncated.
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: EnmgConfig = serde_json::from_value(migrated)?;
    config.validate()?;
    Ok(Some(config))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update enmg."
        ));
    }

    // v0 → v1: add weights with the historical high=2, medium=1 scheme
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let weights = serde_json::to_value(ImportanceWeights::default())?;
        obj.entry("weights").or_insert(weights);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added weights)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &EnmgConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
