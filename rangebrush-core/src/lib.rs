//! Rangebrush Core: interactive numeric range selection.
//!
//! This crate contains the range selector widget core, free of any UI runtime:
//! - Domain, selection and host-facing range limits
//! - Linear scale between domain values and a fixed-width pixel track
//! - Brush drag (live pending range, commit on drag end)
//! - Typed endpoint edits with live validation, atomic commit, cancel
//! - Cancellable settle delay for derived visuals after a drag
//! - TOML config and replayable event scripts

pub mod config;
pub mod domain;
pub mod edit;
pub mod error;
pub mod scale;
pub mod script;
pub mod selector;
pub mod settle;

pub use config::SelectorConfig;
pub use domain::{Domain, Endpoint, RangeLimits, Selection};
pub use edit::{EditBuffer, EditState};
pub use error::{ConfigError, ScriptError, SelectorError, ValidationError};
pub use scale::{Geometry, LinearScale};
pub use script::{replay, Replay, ReplayStep, Script, ScriptEvent};
pub use selector::{CommitOutcome, RangeSelector};
pub use settle::SettleTimer;
