//! Rangebrush TUI - brushable histogram in the terminal
//!
//! Provides interactive range selection over a set of values with:
//! - Mouse brushing on a track under the histogram
//! - Typed Min / Max inputs with live validation
//! - Zooming the domain into the committed selection
//! - Commit history and persisted session state

pub mod app;
pub mod data_loader;
pub mod histogram;
pub mod input;
pub mod persistence;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::{handle_key, handle_mouse};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
