//! Test helpers for building app state over a known value set

use rangebrush_core::{Selection, SelectorConfig};

use crate::app::AppState;

/// The integers 0..=20, so the domain is `[0, 20]` and the track maps 10.75 px per unit.
pub fn sample_values() -> Vec<f64> {
    (0..=20).map(f64::from).collect()
}

pub fn app_with(initial: Option<Selection>) -> AppState {
    AppState::new(sample_values(), &SelectorConfig::default(), initial).unwrap()
}
