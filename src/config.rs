use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Kalends configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KalendsConfig {
    /// Adjustment used when a command does not give one.
    #[serde(default = "default_adjust")]
    pub default_adjust: String,

    /// Additional domains.
    #[serde(default)]
    pub domain: Vec<DomainToml>,
}

impl Default for KalendsConfig {
    fn default() -> Self {
        Self {
            default_adjust: default_adjust(),
            domain: Vec::new(),
        }
    }
}

impl KalendsConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

fn default_adjust() -> String {
    "none".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainToml {
    pub label: String,
    /// Base resolution name.
    pub resolution: String,
    #[serde(default)]
    pub origin: i64,
    #[serde(default)]
    pub cycle: Option<Vec<bool>>,
    #[serde(default)]
    pub sub: Option<SubToml>,
}

/// Sub-period pattern. Exactly one of `ranks` or `weekdays` must be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubToml {
    /// Sub unit name.
    pub unit: String,
    #[serde(default)]
    pub ranks: Option<Vec<i64>>,
    #[serde(default)]
    pub weekdays: Option<Vec<WeekdayRankToml>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekdayRankToml {
    pub weekday: String,
    pub rank: i32,
}
