//! Script replay from files, the way the CLI drives it.

use rangebrush_core::{replay, RangeLimits, Script, ScriptError, SelectorConfig, Selection};

const SESSION: &str = r#"
[limits]
min = 0.0
max = 20.0
minBrush = 5.0
maxBrush = 15.0

# Brush over the whole track, let go
[[events]]
type = "DRAG"
x0 = 0.0
x1 = 215.0

[[events]]
type = "END_DRAG"

# Type a crossed range and press Enter
[[events]]
type = "EDIT"
endpoint = "start"
text = "12"

[[events]]
type = "EDIT"
endpoint = "end"
text = "3"

[[events]]
type = "COMMIT"

# Escape clears the message
[[events]]
type = "CANCEL"

# Host narrows the domain
[[events]]
type = "UPDATE_DOMAIN"
min = 2.0
max = 6.0
"#;

#[test]
fn replays_toml_session_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");
    std::fs::write(&path, SESSION).unwrap();

    let script = Script::load(&path).unwrap();
    let replay = replay(&script, &SelectorConfig::default()).unwrap();

    // Drag: pending only, then committed once
    assert_eq!(replay.steps[0].pending, Some(Selection::new(0.0, 20.0)));
    assert!(replay.steps[0].commits.is_empty());
    assert_eq!(replay.steps[1].commits, vec![Selection::new(0.0, 20.0)]);

    // Live order violation while typing
    assert!(replay.steps[3].validation.is_some());
    assert_eq!(replay.steps[3].start_text, "12");

    // Rejected commit keeps the dragged selection and the message
    assert!(replay.steps[4].commits.is_empty());
    assert_eq!(replay.steps[4].selection, Selection::new(0.0, 20.0));
    assert!(replay.steps[4].validation.is_some());
    assert_eq!(replay.steps[4].start_text, "0");

    assert_eq!(replay.steps[5].validation, None);

    // Domain update clamps without a commit
    assert!(replay.steps[6].commits.is_empty());
    assert_eq!(replay.final_selection(), Selection::new(2.0, 6.0));
    assert_eq!(replay.commits(), vec![Selection::new(0.0, 20.0)]);
}

#[test]
fn json_script_with_bad_limits_fails_to_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"limits":{"min":9,"max":1},"events":[]}"#).unwrap();

    let script = Script::load(&path).unwrap();
    let err = replay(&script, &SelectorConfig::default()).unwrap_err();
    assert!(matches!(err, ScriptError::Selector(_)));
}

#[test]
fn missing_script_is_an_io_error() {
    let err = Script::load(std::path::Path::new("/nonexistent/session.toml")).unwrap_err();
    assert!(matches!(err, ScriptError::Io { .. }));
}

#[test]
fn non_finite_values_in_script_never_reach_a_commit() {
    let script: Script = toml::from_str(
        r#"
[limits]
min = 0.0
max = 20.0
minBrush = nan
maxBrush = 15.0

[[events]]
type = "SELECT"
start = nan
end = 5.0

[[events]]
type = "DRAG"
x0 = 0.0
x1 = 107.5

[[events]]
type = "END_DRAG"
"#,
    )
    .unwrap();

    let replay = replay(&script, &SelectorConfig::default()).unwrap();
    assert_eq!(replay.initial, Selection::new(0.0, 20.0));
    assert!(replay.steps[0].commits.is_empty());
    assert_eq!(replay.commits(), vec![Selection::new(0.0, 10.0)]);
}

#[test]
fn overflowing_domain_is_rejected() {
    let script = Script {
        limits: RangeLimits::new(-f64::MAX, f64::MAX),
        events: Vec::new(),
    };
    let err = replay(&script, &SelectorConfig::default()).unwrap_err();
    assert!(matches!(err, ScriptError::Selector(_)));
}
