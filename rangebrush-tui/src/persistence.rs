//! App state persistence: JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use rangebrush_core::{Domain, Selection};

use crate::app::{AppState, DEFAULT_BINS};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub selection: Option<Selection>,
    /// Zoomed domain, if the session ended zoomed in.
    pub zoom: Option<Domain>,
    pub bin_count: usize,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            selection: None,
            zoom: None,
            bin_count: DEFAULT_BINS,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    let domain = *app.selector.domain();
    PersistedState {
        selection: Some(app.selector.selection()),
        zoom: (domain != app.full_domain).then_some(domain),
        bin_count: app.bin_count,
    }
}

/// Apply the parts of persisted state not consumed at construction (the
/// selection is passed to [`AppState::new`]). A stale zoom outside the current
/// values' range is dropped.
pub fn apply(app: &mut AppState, state: &PersistedState) {
    if let Some(zoom) = state.zoom {
        let full = app.full_domain;
        if full.contains(zoom.min()) && full.contains(zoom.max()) {
            app.selector.update_domain(zoom);
        }
    }
    // Rebuilds the histogram over whichever domain is now active
    app.set_bin_count(state.bin_count);
}
