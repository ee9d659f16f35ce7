//! Screen configuration.
//!
//! A grid is configured by the selection bound and the items it offers.
//! Both have defaults (six slots, the letters `A` to `Z`), and either can
//! be overridden in code or from a TOML document:
//!
//! ```toml
//! max_size = 4
//! items = ["red", "green", "blue", "cyan", "magenta"]
//! ```

use std::path::Path;

use selectable_grid_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Default selection bound.
pub const DEFAULT_MAX_SIZE: usize = 6;

/// Configuration for one grid screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Upper bound on the number of selected items; also the tray slot count.
    pub max_size: usize,
    /// The universe, in catalog order.
    pub items: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            items: alphabet(),
        }
    }
}

impl GridConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection bound.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Replaces the universe.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|err| GridError::config_io(path, err))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            max_size = config.max_size,
            items = config.items.len(),
            "loaded grid configuration"
        );
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| GridError::invalid_config(err.to_string()))
    }

    /// Rejects configurations no screen can use.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(GridError::invalid_config("max_size must be at least 1"));
        }
        if self.items.is_empty() {
            return Err(GridError::invalid_config("items must not be empty"));
        }
        Ok(())
    }
}

/// The letters `A` through `Z` as one-character strings.
pub fn alphabet() -> Vec<String> {
    ('A'..='Z').map(String::from).collect()
}
