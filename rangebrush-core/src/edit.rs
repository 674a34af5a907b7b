//! Typed endpoint edits: per-endpoint text buffers and the session state.

use crate::domain::{Endpoint, Selection};

/// Text being typed for one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub text: String,
    pub valid: bool,
}

impl EditBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let valid = parse_value(&text).is_some();
        Self { text, valid }
    }

    pub fn value(&self) -> Option<f64> {
        parse_value(&self.text)
    }
}

/// Observable state of the edit session.
///
/// Committing and cancelling happen inside a single call and always land back
/// on `Idle`, so only the resting states are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing,
}

/// Buffers for both endpoints. Exists logically only while `Editing`.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    start: Option<EditBuffer>,
    end: Option<EditBuffer>,
}

impl EditSession {
    pub fn state(&self) -> EditState {
        if self.start.is_some() || self.end.is_some() {
            EditState::Editing
        } else {
            EditState::Idle
        }
    }

    pub fn buffer(&self, endpoint: Endpoint) -> Option<&EditBuffer> {
        match endpoint {
            Endpoint::Start => self.start.as_ref(),
            Endpoint::End => self.end.as_ref(),
        }
    }

    pub fn set(&mut self, endpoint: Endpoint, text: &str) -> &EditBuffer {
        let slot = match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        };
        slot.insert(EditBuffer::new(text))
    }

    /// Drop both buffers.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Value to check the other endpoint against: a valid buffer, else the committed bound.
    pub fn pending_value(&self, endpoint: Endpoint, committed: &Selection) -> f64 {
        self.buffer(endpoint)
            .and_then(EditBuffer::value)
            .unwrap_or_else(|| committed.get(endpoint))
    }
}

/// Parse typed text as a finite number. Surrounding whitespace is ignored.
pub fn parse_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Text shown in an endpoint input for a committed value.
pub fn format_value(v: f64) -> String {
    // f64 Display already prints 5.0 as "5"
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_numbers() {
        assert_eq!(parse_value("8"), Some(8.0));
        assert_eq!(parse_value("  -2.5 "), Some(-2.5));
        assert_eq!(parse_value("1e3"), Some(1000.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_value("kjhfkjfkl"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("12abc"), None);
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("-infinity"), None);
    }

    #[test]
    fn format_drops_trailing_zero() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(7.25), "7.25");
        assert_eq!(format_value(-3.0), "-3");
    }

    #[test]
    fn session_state_follows_buffers() {
        let mut session = EditSession::default();
        assert_eq!(session.state(), EditState::Idle);
        session.set(Endpoint::End, "10");
        assert_eq!(session.state(), EditState::Editing);
        session.clear();
        assert_eq!(session.state(), EditState::Idle);
    }

    #[test]
    fn pending_value_prefers_valid_buffer() {
        let committed = Selection::new(5.0, 15.0);
        let mut session = EditSession::default();
        assert_eq!(session.pending_value(Endpoint::End, &committed), 15.0);

        session.set(Endpoint::End, "10");
        assert_eq!(session.pending_value(Endpoint::End, &committed), 10.0);

        // Invalid text falls back to the committed bound
        session.set(Endpoint::End, "x");
        assert_eq!(session.pending_value(Endpoint::End, &committed), 15.0);
    }
}
