//! Configuration system for canopy.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CanopyError, CanopyResult};

/// Separator used when rendering composite keys as string labels.
pub const DEFAULT_KEY_SEPARATOR: char = '-';

/// Shared-instance registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of records to reserve room for up front.
    pub initial_capacity: usize,
    /// Separator for composite key labels.
    pub key_separator: char,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            key_separator: DEFAULT_KEY_SEPARATOR,
        }
    }
}

/// History store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of snapshots to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
        }
    }
}

/// Main canopy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanopyConfig {
    /// Registry configuration.
    pub registry: RegistryConfig,
    /// History configuration.
    pub history: HistoryConfig,
}

impl CanopyConfig {
    /// Default config file location (`<config dir>/canopy/config.toml`).
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("canopy"))
            .unwrap_or_else(|| PathBuf::from(".canopy"))
            .join("config.toml")
    }

    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> CanopyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str());

        let config: Self = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| CanopyError::configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| CanopyError::configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| CanopyError::configuration(e.to_string()))?,
            _ => {
                return Err(CanopyError::configuration(
                    "Unsupported config file format. Use .toml, .json, or .yaml",
                ))
            }
        };

        tracing::info!(path = %path.display(), "Loaded canopy configuration");
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = env_parse::<usize>("CANOPY_REGISTRY_CAPACITY") {
            config.registry.initial_capacity = capacity;
        }
        if let Ok(sep) = std::env::var("CANOPY_KEY_SEPARATOR") {
            let mut chars = sep.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => config.registry.key_separator = c,
                _ => tracing::warn!("CANOPY_KEY_SEPARATOR must be a single character, ignoring {:?}", sep),
            }
        }
        if let Some(capacity) = env_parse::<usize>("CANOPY_HISTORY_CAPACITY") {
            config.history.initial_capacity = capacity;
        }

        config
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> CanopyConfigBuilder {
        CanopyConfigBuilder::default()
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("{} has invalid value {:?}, using default", name, raw);
            None
        }
    }
}

/// Builder for CanopyConfig.
#[derive(Default)]
pub struct CanopyConfigBuilder {
    config: CanopyConfig,
}

impl CanopyConfigBuilder {
    /// Set registry initial capacity.
    pub fn registry_capacity(mut self, capacity: usize) -> Self {
        self.config.registry.initial_capacity = capacity;
        self
    }

    /// Set the composite key label separator.
    pub fn key_separator(mut self, separator: char) -> Self {
        self.config.registry.key_separator = separator;
        self
    }

    /// Set history initial capacity.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history.initial_capacity = capacity;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> CanopyConfig {
        self.config
    }
}
