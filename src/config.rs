//! # Configuration
//!
//! TOML configuration for the order desk. Every section is optional and falls back
//! to its defaults:
//!
//! ```toml
//! [storage]
//! backend = "file"          # or "memory"
//! path = "./data"
//! key = "salesOrders"
//!
//! [pricing]
//! default_price = 100000.0
//!
//! [pricing.overrides]
//! "T-2557016-MIC" = 1250000.0
//!
//! [lifecycle]
//! policy = "table"          # "free" | "forward-only" | "table"
//!
//! [lifecycle.allowed]
//! pending-delivery = ["pending-invoice", "delivery"]
//!
//! [logging]
//! filter = "info"
//!
//! [actors]
//! buffer_size = 32
//! ```
//!
//! Parsing goes through [`FromStr`] so that validation always runs after decoding.

use crate::model::{OrderStatus, TransitionPolicy, UnknownStatus};
use crate::order_actor::STORAGE_KEY;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The TOML could not be decoded.
    #[error("Configuration error: {0}")]
    Parse(String),
    /// The configuration decoded but holds unusable values.
    #[error("Validation error: {0}")]
    Validation(String),
    /// A lifecycle table names a status that does not exist.
    #[error("Validation error: {0}")]
    UnknownStatus(#[from] UnknownStatus),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: StorageConfig,
    pub pricing: PricingConfig,
    pub lifecycle: LifecycleConfig,
    pub logging: LoggingConfig,
    pub actors: ActorsConfig,
}

/// Where the order list is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Process-local; nothing survives a restart.
    Memory,
    /// One `<key>.json` file under `path`.
    #[default]
    File,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub backend: BackendKind,
    pub path: PathBuf,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            path: PathBuf::from("./data"),
            key: STORAGE_KEY.to_string(),
        }
    }
}

/// Unit prices handed out when a catalog item is attached to an order line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub default_price: f64,
    /// Material code (`materialCI`) to price.
    pub overrides: HashMap<String, f64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_price: 100_000.0,
            overrides: HashMap::new(),
        }
    }
}

impl PricingConfig {
    pub fn price_for(&self, material_ci: &str) -> f64 {
        self.overrides
            .get(material_ci)
            .copied()
            .unwrap_or(self.default_price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    #[default]
    Free,
    ForwardOnly,
    Table,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifecycleConfig {
    pub policy: PolicyKind,
    /// Source status to allowed targets, read when `policy = "table"`.
    pub allowed: HashMap<String, Vec<String>>,
}

impl LifecycleConfig {
    pub fn transition_policy(&self) -> Result<TransitionPolicy, ConfigError> {
        match self.policy {
            PolicyKind::Free => Ok(TransitionPolicy::Free),
            PolicyKind::ForwardOnly => Ok(TransitionPolicy::ForwardOnly),
            PolicyKind::Table => {
                let mut table: HashMap<OrderStatus, HashSet<OrderStatus>> = HashMap::new();
                for (from, targets) in &self.allowed {
                    let from: OrderStatus = from.parse()?;
                    let targets = targets
                        .iter()
                        .map(|to| to.parse())
                        .collect::<Result<HashSet<OrderStatus>, _>>()?;
                    table.entry(from).or_default().extend(targets);
                }
                Ok(TransitionPolicy::Table(table))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActorsConfig {
    /// Request channel capacity of each actor.
    pub buffer_size: usize,
}

impl Default for ActorsConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl Config {
    /// Reads and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        std::fs::read_to_string(path)?.parse()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Validation("Storage key cannot be empty".into()));
        }
        if self.storage.backend == BackendKind::File && self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Storage path is required for the file backend".into(),
            ));
        }

        let prices = std::iter::once(("default_price", self.pricing.default_price)).chain(
            self.pricing
                .overrides
                .iter()
                .map(|(material, price)| (material.as_str(), *price)),
        );
        for (name, price) in prices {
            if !price.is_finite() || price < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "Price for {} must be a non-negative number, got {}",
                    name, price
                )));
            }
        }

        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "Actor buffer size must be greater than zero".into(),
            ));
        }

        self.lifecycle.transition_policy()?;
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
