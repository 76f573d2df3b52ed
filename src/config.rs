use std::path::Path;

use anyhow::{Context, Result};
use lunkalendaro::chinese::ConversionOptions;
use serde::Deserialize;

use crate::cli::Form;

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Conversion settings.
    #[serde(default)]
    pub conversion: ConversionOptions,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub form: Form,
    /// Only consulted when no date is given on the command line.
    #[serde(default)]
    pub utc_offset_hours: Option<f64>,
}

/// Load the config file, or defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
