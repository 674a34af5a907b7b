//! Selector configuration (TOML).
//!
//! ```toml
//! settle_ms = 200
//!
//! [geometry]
//! track_width_px = 250.0
//! left_margin_px = 25.0
//! right_margin_px = 10.0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{RangeLimits, Selection};
use crate::error::{ConfigError, SelectorError};
use crate::scale::Geometry;
use crate::selector::RangeSelector;
use crate::settle::DEFAULT_SETTLE;

/// Everything about a selector that is fixed at construction, apart from its domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub geometry: Geometry,
    /// Delay after a drag commit before derived visuals are recomputed.
    pub settle_ms: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            settle_ms: DEFAULT_SETTLE.as_millis() as u64,
        }
    }
}

impl SelectorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file. Geometry is validated while parsing.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Build a selector for `limits` with this geometry and settle delay.
    pub fn build<F>(&self, limits: &RangeLimits, on_commit: F) -> Result<RangeSelector, SelectorError>
    where
        F: FnMut(Selection) + Send + 'static,
    {
        Ok(RangeSelector::from_limits(limits, self.geometry, on_commit)?
            .with_settle_delay(self.settle_delay()))
    }
}
