//! Layered configuration.
//!
//! Sources, lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables prefixed `ARBOR_`, with `__` separating nested
//!    keys (`ARBOR_GRAPH__REPRESENTATION=matrix`)
//!
//! ```toml
//! [logging]
//! level = "debug"
//! json = false
//!
//! [graph]
//! representation = "adjacency-list"
//! directed = true
//! vertex_count = 6
//!
//! [traversal]
//! order = "bfs"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Representation, TraversalOrder};

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "ARBOR_";

/// Logging settings consumed by the CLI subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Defaults for graphs built from external input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Storage used when none is requested explicitly.
    pub representation: Representation,
    /// Whether edges are directed.
    pub directed: bool,
    /// Declared vertex count; `None` derives it from the edges.
    pub vertex_count: Option<i64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            representation: Representation::EdgeList,
            directed: true,
            vertex_count: None,
        }
    }
}

/// Traversal defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalDefaults {
    /// Order used when none is requested explicitly.
    pub order: TraversalOrder,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArborConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Graph construction defaults.
    pub graph: GraphConfig,
    /// Traversal defaults.
    pub traversal: TraversalDefaults,
}

impl ArborConfig {
    /// Builds the layered provider without extracting it.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ArborConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// A missing `path` is not an error (figment treats absent files as empty).
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source is malformed or a value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        tracing::debug!(?path, ?config, "configuration loaded");
        Ok(config)
    }

    /// Checks values the types alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for an empty log level or a negative vertex count.
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        if let Some(count) = self.graph.vertex_count.filter(|c| *c < 0) {
            return Err(Error::Config(format!(
                "graph.vertex_count must be >= 0, got {count}"
            )));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
