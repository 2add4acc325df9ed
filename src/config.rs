//! CLI configuration module.
//!
//! Handles loading and validating `stopwise.toml`. The file is a
//! convenience layer only: it sets defaults for the global CLI flags, so
//! a photographer who always works in third stops does not have to type
//! `--scale third` on every call. Flags always win over the file.
//!
//! ## Config File Location
//!
//! `stopwise.toml` is read from the working directory when present, or
//! from wherever `--config` points (in which case it must exist).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! scale = "full"   # Stop scale: "full", "half", or "third"
//! ev = 0.0         # EV compensation in stops (positive = more light)
//! json = false     # Emit JSON instead of text output
//! ```
//!
//! Config files are sparse — set just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::StopScale;

/// File name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "stopwise.toml";

/// Widest EV compensation a config default may carry, in stops. The
/// whole shutter scale spans about 18 stops, so anything past this is a
/// typo, not a creative choice.
const MAX_DEFAULT_EV: f64 = 10.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// CLI defaults loaded from `stopwise.toml`.
///
/// All fields have sensible defaults. Config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Defaults for the global CLI flags.
    pub defaults: DefaultsConfig,
}

/// Default values for `--scale`, `--ev`, and `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Stop scale for solved values and tables.
    pub scale: StopScale,
    /// EV compensation in stops applied to every solve.
    pub ev: f64,
    /// Emit machine-readable JSON instead of text.
    pub json: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            scale: StopScale::Full,
            ev: 0.0,
            json: false,
        }
    }
}

impl CliConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.defaults.ev.is_finite() || self.defaults.ev.abs() > MAX_DEFAULT_EV {
            return Err(ConfigError::Validation(format!(
                "defaults.ev must be a finite value between -{MAX_DEFAULT_EV} and {MAX_DEFAULT_EV} stops"
            )));
        }
        Ok(())
    }
}

/// Read and validate a config file at an explicit path.
///
/// Unlike [`load_config`], a missing file is an error here: the caller
/// named it, so silence would hide the typo.
pub fn read_config_file(path: &Path) -> Result<CliConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: CliConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load `stopwise.toml` from the given directory.
///
/// Returns stock defaults when the file does not exist; rejects unknown
/// keys and validates the result when it does.
pub fn load_config(dir: &Path) -> Result<CliConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(CliConfig::default());
    }
    read_config_file(&config_path)
}

/// Returns a fully-commented stock `stopwise.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# stopwise configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# stopwise reads stopwise.toml from the working directory, or from the
# file --config points at. Command-line flags always override the file.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Defaults for the global CLI flags
# ---------------------------------------------------------------------------
[defaults]
# Stop scale for solved values and tables: "full", "half", or "third".
# Third stops match the click size on most modern camera bodies.
scale = "full"

# EV compensation in stops applied to every solve. Positive shifts the
# result toward more light (for example 1.0 when shooting backlit
# subjects). Same meaning as --ev.
ev = 0.0

# Emit machine-readable JSON instead of text output.
json = false
"#
}
