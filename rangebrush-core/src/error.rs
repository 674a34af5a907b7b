//! Error types.
//!
//! Two families: fatal errors that stop a selector from being built
//! ([`SelectorError`], config and script loading), and non-fatal input
//! problems ([`ValidationError`]) that the selector resolves locally and
//! surfaces as a validation message.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Endpoint;

/// Errors that prevent a selector from being constructed or re-domained.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    #[error("invalid domain: min {min} must be finite and not greater than max {max}")]
    InvalidDomain { min: f64, max: f64 },

    #[error(
        "invalid geometry: track width {track_width}px must exceed margins {left}px + {right}px"
    )]
    InvalidGeometry {
        track_width: f64,
        left: f64,
        right: f64,
    },
}

/// Recoverable user-input problems, shown inline next to the inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid Entered Value")]
    Parse { endpoint: Endpoint, text: String },

    #[error("Minimum {start} must not be greater than maximum {end}")]
    OrderViolation { start: f64, end: f64 },
}

/// Errors from loading a [`crate::SelectorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// Errors from loading or replaying a [`crate::Script`].
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported script format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("failed to parse TOML script: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON script: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}
