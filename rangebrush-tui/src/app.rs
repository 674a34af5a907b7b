//! Application state: single-owner, main-thread only.
//!
//! The selector raises commits into a channel; the main loop drains it once per
//! turn, so anything a commit triggers (history, derived counts, domain
//! changes) runs on the next turn rather than inside the selector call.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDateTime;
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use rangebrush_core::{
    CommitOutcome, Domain, Endpoint, RangeSelector, Selection, SelectorConfig,
};

use crate::data_loader::domain_of;
use crate::histogram::{count_selected, Histogram};

pub const DEFAULT_BINS: usize = 40;
pub const MIN_BINS: usize = 4;
pub const MAX_BINS: usize = 200;
const HISTORY_CAP: usize = 50;
/// Keyboard nudges move the brush by this fraction of the track.
const NUDGE_FRACTION: f64 = 1.0 / 50.0;

/// Which part of the widget receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    Track,
    Start,
    End,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Track => Focus::Start,
            Focus::Start => Focus::End,
            Focus::End => Focus::Track,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Track => Focus::End,
            Focus::Start => Focus::Track,
            Focus::End => Focus::Start,
        }
    }

    pub fn endpoint(self) -> Option<Endpoint> {
        match self {
            Focus::Track => None,
            Focus::Start => Some(Endpoint::Start),
            Focus::End => Some(Endpoint::End),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Track => "Track",
            Focus::Start => "Min",
            Focus::End => "Max",
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One committed selection, for the history list.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub timestamp: NaiveDateTime,
    pub selection: Selection,
}

/// Top-level application state.
pub struct AppState {
    pub selector: RangeSelector,
    pub commits_rx: Receiver<Selection>,

    // Data
    pub values: Vec<f64>,
    pub full_domain: Domain,
    pub histogram: Histogram,
    pub bin_count: usize,
    /// Values inside the committed selection; refreshed once a drag has settled.
    pub selected_count: usize,

    // Interaction
    pub focus: Focus,
    /// Next keystroke replaces the input text instead of appending to it.
    pub replace_on_type: bool,
    /// Track pixel where the current mouse drag started.
    pub drag_anchor: Option<f64>,
    drag_moved: bool,
    /// Terminal area of the last draw, for mapping mouse columns.
    pub viewport: Rect,
    pub show_help: bool,
    pub running: bool,

    // Cross-cutting
    pub commit_history: VecDeque<CommitRecord>,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(values: Vec<f64>, config: &SelectorConfig, initial: Option<Selection>) -> Result<Self> {
        let full_domain = domain_of(&values)?;
        let (tx, commits_rx) = mpsc::channel();
        let selector = RangeSelector::new(full_domain, config.geometry, initial, move |s| {
            // The receiver lives in the same AppState as the selector.
            let _ = tx.send(s);
        })
        .with_settle_delay(config.settle_delay());

        let histogram = Histogram::build(&values, &full_domain, DEFAULT_BINS);
        let selected_count = count_selected(&values, &selector.selection());
        Ok(Self {
            selector,
            commits_rx,
            values,
            full_domain,
            histogram,
            bin_count: DEFAULT_BINS,
            selected_count,
            focus: Focus::Track,
            replace_on_type: false,
            drag_anchor: None,
            drag_moved: false,
            viewport: Rect::default(),
            show_help: false,
            running: true,
            commit_history: VecDeque::with_capacity(HISTORY_CAP),
            status_message: None,
        })
    }

    /// Handle commits raised since the last turn.
    pub fn drain_commits(&mut self) {
        let commits: Vec<Selection> = self.commits_rx.try_iter().collect();
        for selection in commits {
            self.commit_history.push_front(CommitRecord {
                timestamp: chrono::Local::now().naive_local(),
                selection,
            });
            if self.commit_history.len() > HISTORY_CAP {
                self.commit_history.pop_back();
            }
            self.set_status(format!("Committed {selection}"));
        }
        // Drag commits wait for the settle delay; everything else refreshes now.
        if !self.selector.settle_pending() {
            self.refresh_selected_count();
        }
    }

    /// Per-turn clock tick.
    pub fn tick(&mut self, now: Instant) {
        if self.selector.poll_settle(now) {
            self.refresh_selected_count();
        }
    }

    pub fn refresh_selected_count(&mut self) {
        self.selected_count = count_selected(&self.values, &self.selector.selection());
    }

    fn rebuild_histogram(&mut self) {
        self.histogram = Histogram::build(&self.values, self.selector.domain(), self.bin_count);
        self.refresh_selected_count();
    }

    // ── Focus ──────────────────────────────────────────────────────────

    /// Move focus. Leaving an input counts as blur and commits its edit.
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        if self.focus.endpoint().is_some() {
            let outcome = self.selector.commit_edit();
            self.report(outcome);
        }
        self.focus = focus;
        self.replace_on_type = focus.endpoint().is_some();
    }

    pub fn report(&mut self, outcome: CommitOutcome) {
        match outcome {
            CommitOutcome::Rejected(err) => self.set_error(format!("Edit rejected: {err}")),
            CommitOutcome::Committed(_) | CommitOutcome::Unchanged => {}
        }
    }

    // ── Typed input ────────────────────────────────────────────────────

    pub fn type_char(&mut self, endpoint: Endpoint, c: char) {
        let mut text = if self.replace_on_type {
            String::new()
        } else {
            self.selector.endpoint_text(endpoint)
        };
        self.replace_on_type = false;
        text.push(c);
        self.selector.edit_endpoint(endpoint, &text);
    }

    pub fn backspace(&mut self, endpoint: Endpoint) {
        let mut text = self.selector.endpoint_text(endpoint);
        if self.replace_on_type {
            text.clear();
        }
        self.replace_on_type = false;
        text.pop();
        self.selector.edit_endpoint(endpoint, &text);
    }

    pub fn commit_edit(&mut self) {
        let outcome = self.selector.commit_edit();
        self.report(outcome);
        self.replace_on_type = true;
    }

    pub fn cancel_edit(&mut self) {
        self.selector.cancel_edit();
        self.replace_on_type = true;
        self.set_status("Edit cancelled");
    }

    // ── Brush ──────────────────────────────────────────────────────────

    /// Shift the whole brush left (-1) or right (+1), staying on the track.
    pub fn nudge(&mut self, direction: i32) {
        let (a, b) = self.selector.handle_pixels();
        let width = self.selector.geometry().effective_width();
        let mut d = width * NUDGE_FRACTION * direction as f64;
        if a + d < 0.0 {
            d = -a;
        }
        if b + d > width {
            d = width - b;
        }
        if d == 0.0 {
            return;
        }
        self.selector.drag_to(a + d, b + d);
        self.selector.end_drag();
    }

    pub fn begin_drag(&mut self, px: f64) {
        self.drag_anchor = Some(px);
        self.drag_moved = false;
        self.selector.drag_to(px, px);
    }

    pub fn continue_drag(&mut self, px: f64) {
        if let Some(anchor) = self.drag_anchor {
            self.drag_moved |= px != anchor;
            self.selector.drag_to(anchor, px);
        }
    }

    /// Release the mouse. A click that never moved is dropped rather than committed.
    pub fn finish_drag(&mut self) {
        if self.drag_anchor.take().is_none() {
            return;
        }
        if std::mem::take(&mut self.drag_moved) {
            self.selector.end_drag();
        } else {
            self.selector.cancel_drag();
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag_anchor = None;
        self.drag_moved = false;
        self.selector.cancel_drag();
        self.set_status("Brush cancelled");
    }

    pub fn reset_selection(&mut self) {
        let full = Selection::full(self.selector.domain());
        self.selector.select(full);
    }

    // ── Domain ─────────────────────────────────────────────────────────

    /// Make the committed selection the new domain.
    pub fn zoom_to_selection(&mut self) {
        let s = self.selector.selection();
        if s.start >= s.end {
            self.set_warning("Selection is empty; nothing to zoom into");
            return;
        }
        match Domain::new(s.start, s.end) {
            Ok(domain) => {
                self.selector.update_domain(domain);
                self.rebuild_histogram();
                self.set_status(format!("Zoomed to {s}"));
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    pub fn zoom_out(&mut self) {
        self.selector.update_domain(self.full_domain);
        self.rebuild_histogram();
        self.set_status("Zoomed out to full range");
    }

    pub fn set_bin_count(&mut self, bins: usize) {
        self.bin_count = bins.clamp(MIN_BINS, MAX_BINS);
        self.rebuild_histogram();
    }

    // ── Status ─────────────────────────────────────────────────────────

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::app_with;
    use std::time::Duration;

    #[test]
    fn focus_cycle() {
        assert_eq!(Focus::Track.next(), Focus::Start);
        assert_eq!(Focus::End.next(), Focus::Track);
        assert_eq!(Focus::Track.prev(), Focus::End);
        assert_eq!(Focus::Start.prev(), Focus::Track);
    }

    #[test]
    fn starts_with_full_domain_of_values() {
        let app = app_with(None);
        assert_eq!(app.selector.selection(), Selection::new(0.0, 20.0));
        assert_eq!(app.selected_count, app.values.len());
    }

    #[test]
    fn empty_values_are_rejected() {
        assert!(AppState::new(Vec::new(), &SelectorConfig::default(), None).is_err());
    }

    #[test]
    fn blur_commits_typed_value() {
        let mut app = app_with(Some(Selection::new(5.0, 15.0)));
        app.set_focus(Focus::Start);
        app.type_char(Endpoint::Start, '7');
        app.set_focus(Focus::End);
        app.drain_commits();

        assert_eq!(app.selector.selection(), Selection::new(7.0, 15.0));
        assert_eq!(app.commit_history.len(), 1);
    }

    #[test]
    fn first_keystroke_replaces_then_appends() {
        let mut app = app_with(Some(Selection::new(5.0, 15.0)));
        app.set_focus(Focus::End);
        app.type_char(Endpoint::End, '1');
        app.type_char(Endpoint::End, '2');
        assert_eq!(app.selector.endpoint_text(Endpoint::End), "12");
    }

    #[test]
    fn rejected_blur_reports_error() {
        let mut app = app_with(Some(Selection::new(5.0, 15.0)));
        app.set_focus(Focus::Start);
        app.type_char(Endpoint::Start, 'x');
        app.set_focus(Focus::Track);

        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Error);
        assert!(msg.contains("Invalid Entered Value"));
        assert_eq!(app.selector.selection(), Selection::new(5.0, 15.0));
    }

    #[test]
    fn drag_count_refreshes_after_settle() {
        let mut app = app_with(None);
        let total = app.values.len();

        app.begin_drag(0.0);
        app.continue_drag(107.5);
        app.finish_drag();
        app.drain_commits();
        // Still the pre-drag count until the brush settles
        assert_eq!(app.selected_count, total);

        app.tick(Instant::now() + Duration::from_secs(1));
        assert!(app.selected_count < total);
        assert_eq!(app.selector.selection(), Selection::new(0.0, 10.0));
    }

    #[test]
    fn click_without_motion_keeps_selection() {
        let mut app = app_with(Some(Selection::new(5.0, 15.0)));
        app.begin_drag(50.0);
        app.continue_drag(50.0);
        app.finish_drag();
        assert!(!app.selector.is_dragging());
        assert!(app.commits_rx.try_recv().is_err());
        assert_eq!(app.selector.selection(), Selection::new(5.0, 15.0));
    }

    #[test]
    fn nudge_stays_on_track() {
        let mut app = app_with(Some(Selection::new(0.0, 10.0)));
        app.nudge(-1);
        // Already at the left edge: no commit
        assert!(app.commits_rx.try_recv().is_err());

        app.nudge(1);
        let s = app.selector.selection();
        assert!(s.start > 0.0);
        assert!((s.end - s.start - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_in_and_out() {
        let mut app = app_with(Some(Selection::new(5.0, 15.0)));
        app.zoom_to_selection();
        assert_eq!(app.selector.domain().min(), 5.0);
        assert_eq!(app.selector.domain().max(), 15.0);
        assert_eq!(app.histogram.bins()[0].lo, 5.0);
        // Zooming is host-driven: no commit
        assert!(app.commits_rx.try_recv().is_err());

        app.zoom_out();
        assert_eq!(*app.selector.domain(), app.full_domain);
        assert_eq!(app.selector.selection(), Selection::new(5.0, 15.0));
    }

    #[test]
    fn history_caps_at_50() {
        let mut app = app_with(None);
        for i in 0..60 {
            app.selector.select(Selection::new(0.0, (i % 20) as f64));
        }
        app.drain_commits();
        assert_eq!(app.commit_history.len(), 50);
        assert_eq!(app.commit_history[0].selection, Selection::new(0.0, 19.0));
    }

    #[test]
    fn bin_count_is_clamped() {
        let mut app = app_with(None);
        app.set_bin_count(1);
        assert_eq!(app.histogram.bins().len(), MIN_BINS);
        app.set_bin_count(10_000);
        assert_eq!(app.bin_count, MAX_BINS);
    }
}
