//! Replayable event scripts.
//!
//! A script is the range limits a host would hand to the widget plus the
//! sequence of host calls it would make. Replaying records what a view would
//! see after each call and which commits were raised.
//!
//! ```toml
//! [limits]
//! min = 0.0
//! max = 20.0
//! minBrush = 5.0
//! maxBrush = 15.0
//!
//! [[events]]
//! type = "EDIT"
//! endpoint = "start"
//! text = "7"
//!
//! [[events]]
//! type = "BLUR"
//! ```

use std::path::Path;
use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::config::SelectorConfig;
use crate::domain::{Domain, Endpoint, RangeLimits, Selection};
use crate::error::ScriptError;
use crate::selector::RangeSelector;

/// One host call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScriptEvent {
    /// Live brush to a pixel range.
    Drag { x0: f64, x1: f64 },
    EndDrag,
    CancelDrag,
    /// Programmatic brush in domain units.
    Select { start: f64, end: f64 },
    /// Replace the text typed into one endpoint input.
    Edit { endpoint: Endpoint, text: String },
    /// Enter key.
    Commit,
    /// Focus loss; commits like Enter.
    Blur,
    /// Escape key.
    Cancel,
    UpdateDomain { min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub limits: RangeLimits,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Load a `.toml` or `.json` script.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ScriptError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// What a view would show after one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: ScriptEvent,
    pub selection: Selection,
    pub pending: Option<Selection>,
    pub start_text: String,
    pub end_text: String,
    pub validation: Option<String>,
    /// Commits raised by this event, in order.
    pub commits: Vec<Selection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replay {
    pub initial: Selection,
    pub steps: Vec<ReplayStep>,
}

impl Replay {
    /// Every commit raised during the replay.
    pub fn commits(&self) -> Vec<Selection> {
        self.steps
            .iter()
            .flat_map(|s| s.commits.iter().copied())
            .collect()
    }

    pub fn final_selection(&self) -> Selection {
        self.steps.last().map(|s| s.selection).unwrap_or(self.initial)
    }
}

/// Run `script` through a fresh selector built from `config`.
pub fn replay(script: &Script, config: &SelectorConfig) -> Result<Replay, ScriptError> {
    let (tx, rx) = mpsc::channel();
    let mut selector = config.build(&script.limits, move |s| {
        // Receiver outlives the selector within this function.
        let _ = tx.send(s);
    })?;

    let initial = selector.selection();
    let mut steps = Vec::with_capacity(script.events.len());

    for (index, event) in script.events.iter().enumerate() {
        apply(&mut selector, event)?;
        steps.push(ReplayStep {
            index,
            event: event.clone(),
            selection: selector.selection(),
            pending: selector.pending_selection(),
            start_text: selector.endpoint_text(Endpoint::Start),
            end_text: selector.endpoint_text(Endpoint::End),
            validation: selector.validation_message(),
            commits: rx.try_iter().collect(),
        });
    }

    Ok(Replay { initial, steps })
}

fn apply(selector: &mut RangeSelector, event: &ScriptEvent) -> Result<(), ScriptError> {
    match event {
        ScriptEvent::Drag { x0, x1 } => selector.drag_to(*x0, *x1),
        ScriptEvent::EndDrag => {
            selector.end_drag();
        }
        ScriptEvent::CancelDrag => selector.cancel_drag(),
        ScriptEvent::Select { start, end } => {
            selector.select(Selection::new(*start, *end));
        }
        ScriptEvent::Edit { endpoint, text } => selector.edit_endpoint(*endpoint, text),
        ScriptEvent::Commit | ScriptEvent::Blur => {
            selector.commit_edit();
        }
        ScriptEvent::Cancel => selector.cancel_edit(),
        ScriptEvent::UpdateDomain { min, max } => {
            selector.update_domain(Domain::new(*min, *max)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUR_SCRIPT: &str = r#"
        [limits]
        min = 0.0
        max = 20.0
        minBrush = 5.0
        maxBrush = 15.0

        [[events]]
        type = "EDIT"
        endpoint = "start"
        text = "7"

        [[events]]
        type = "BLUR"
    "#;

    #[test]
    fn parses_toml_events() {
        let script: Script = toml::from_str(BLUR_SCRIPT).unwrap();
        assert_eq!(script.events.len(), 2);
        assert_eq!(
            script.events[0],
            ScriptEvent::Edit {
                endpoint: Endpoint::Start,
                text: "7".into()
            }
        );
        assert_eq!(script.events[1], ScriptEvent::Blur);
    }

    #[test]
    fn parses_json_events() {
        let script: Script = serde_json::from_str(
            r#"{"limits":{"min":0,"max":20},"events":[{"type":"DRAG","x0":0,"x1":215},{"type":"END_DRAG"}]}"#,
        )
        .unwrap();
        assert_eq!(script.events[0], ScriptEvent::Drag { x0: 0.0, x1: 215.0 });
        assert_eq!(script.events[1], ScriptEvent::EndDrag);
    }

    #[test]
    fn replay_records_commit_per_step() {
        let script: Script = toml::from_str(BLUR_SCRIPT).unwrap();
        let replay = replay(&script, &SelectorConfig::default()).unwrap();

        assert_eq!(replay.initial, Selection::new(5.0, 15.0));
        assert!(replay.steps[0].commits.is_empty());
        assert_eq!(replay.steps[0].start_text, "7");
        assert_eq!(replay.steps[1].commits, vec![Selection::new(7.0, 15.0)]);
        assert_eq!(replay.final_selection(), Selection::new(7.0, 15.0));
    }

    #[test]
    fn replay_surfaces_invalid_domain() {
        let script = Script {
            limits: RangeLimits::new(0.0, 10.0),
            events: vec![ScriptEvent::UpdateDomain { min: 4.0, max: 1.0 }],
        };
        let err = replay(&script, &SelectorConfig::default()).unwrap_err();
        assert!(matches!(err, ScriptError::Selector(_)));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.yaml");
        std::fs::write(&path, "limits: {}").unwrap();
        assert!(matches!(
            Script::load(&path),
            Err(ScriptError::UnsupportedFormat(_))
        ));
    }
}
