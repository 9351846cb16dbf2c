//! Domains and defaults shared by every subcommand.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use kalends_pattern::Adjustment;
use kalends_time::{DomainRegistry, TimeDomain};
use tracing::info;

use crate::config::KalendsConfig;
use crate::convert;

/// Registry plus defaults built from the optional config file.
pub struct Session {
    pub registry: DomainRegistry,
    pub default_adjust: Adjustment,
}

impl Session {
    /// Loads `config` when given, otherwise starts from the built-in domains.
    pub fn open(config: Option<&Path>) -> Result<Self> {
        let config = match config {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                KalendsConfig::load(path)?
            }
            None => KalendsConfig::default(),
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &KalendsConfig) -> Result<Self> {
        let default_adjust = convert::parse_adjustment(&config.default_adjust)
            .context("invalid default_adjust")?;
        let registry = convert::build_registry(config)?;
        info!(n_domains = registry.len(), "domains ready");
        Ok(Self {
            registry,
            default_adjust,
        })
    }

    /// Looks up a domain by label.
    pub fn domain(&self, label: &str) -> Result<Arc<TimeDomain>> {
        self.registry
            .by_label(label)
            .with_context(|| format!("unknown domain: {label:?}"))
    }

    /// Returns `adjust`, or the configured default when absent.
    pub fn adjust(&self, adjust: Option<Adjustment>) -> Adjustment {
        adjust.unwrap_or(self.default_adjust)
    }
}
