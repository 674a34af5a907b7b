//! The range selector: domain, selection, brush drag, typed edits, commit events.
//!
//! All mutation goes through explicit host calls. A committed change (drag end,
//! programmatic select, successful typed edit) raises the commit listener once.
//! Domain replacement clamps silently and never raises it.
//!
//! The listener is owned by the selector and cannot borrow it, so a listener
//! can never call back into [`RangeSelector::update_domain`] synchronously.
//! Hosts that re-domain in response to a commit queue the update and apply it
//! on their next loop turn.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::domain::{Domain, Endpoint, RangeLimits, Selection};
use crate::edit::{format_value, EditBuffer, EditSession, EditState};
use crate::error::{SelectorError, ValidationError};
use crate::scale::{Geometry, LinearScale};
use crate::settle::SettleTimer;

type CommitListener = Box<dyn FnMut(Selection) + Send>;

/// Result of a commit attempt on the typed edit session.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The edit was applied and the listener raised.
    Committed(Selection),
    /// The edit was discarded as a whole; the selection kept its last committed value.
    Rejected(ValidationError),
    /// No edit session was active.
    Unchanged,
}

pub struct RangeSelector {
    domain: Domain,
    geometry: Geometry,
    selection: Selection,
    /// Live brush in track pixels, normalised so `.0 <= .1`.
    drag: Option<(f64, f64)>,
    edit: EditSession,
    validation: Option<ValidationError>,
    settle: SettleTimer,
    on_commit: CommitListener,
}

impl fmt::Debug for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelector")
            .field("domain", &self.domain)
            .field("geometry", &self.geometry)
            .field("selection", &self.selection)
            .field("drag", &self.drag)
            .field("edit", &self.edit)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl RangeSelector {
    /// Build a selector. Without an initial selection the whole domain is selected;
    /// an initial selection outside the domain is clamped into it, and one with a
    /// non-finite bound is replaced by the whole domain.
    pub fn new<F>(
        domain: Domain,
        geometry: Geometry,
        initial: Option<Selection>,
        on_commit: F,
    ) -> Self
    where
        F: FnMut(Selection) + Send + 'static,
    {
        let selection = initial
            .filter(Selection::is_finite)
            .map(|s| s.clamped_to(&domain))
            .unwrap_or_else(|| Selection::full(&domain));
        Self {
            domain,
            geometry,
            selection,
            drag: None,
            edit: EditSession::default(),
            validation: None,
            settle: SettleTimer::default(),
            on_commit: Box::new(on_commit),
        }
    }

    /// Build from host range limits (`min`, `max` and an optional brush).
    pub fn from_limits<F>(
        limits: &RangeLimits,
        geometry: Geometry,
        on_commit: F,
    ) -> Result<Self, SelectorError>
    where
        F: FnMut(Selection) + Send + 'static,
    {
        let domain = limits.domain()?;
        Ok(Self::new(domain, geometry, limits.selection(), on_commit))
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle = SettleTimer::new(delay);
        self
    }

    // ── Brush drag ─────────────────────────────────────────────────────

    /// Move the live brush to the pixel range `[x0, x1]` (either order).
    ///
    /// Visual only: the committed selection is untouched until [`end_drag`](Self::end_drag).
    /// A newer call replaces the pending range of an older one. Starting a
    /// drag discards any typed edit and cancels a pending settle.
    pub fn drag_to(&mut self, x0: f64, x1: f64) {
        if !x0.is_finite() || !x1.is_finite() {
            return;
        }
        if self.edit.state() == EditState::Editing || self.validation.is_some() {
            self.edit.clear();
            self.validation = None;
        }
        self.settle.cancel();
        self.drag = Some((x0.min(x1), x0.max(x1)));
        trace!(x0, x1, "brush moved");
    }

    /// Finish the drag at the current time. See [`end_drag_at`](Self::end_drag_at).
    pub fn end_drag(&mut self) -> Option<Selection> {
        self.end_drag_at(Instant::now())
    }

    /// Commit the pending brush, raise the listener and arm the settle delay.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn end_drag_at(&mut self, now: Instant) -> Option<Selection> {
        let selection = self.pending_selection()?;
        self.drag = None;
        // Text typed while the brush moved is superseded by the drag result.
        self.edit.clear();
        self.validation = None;
        self.commit(selection);
        self.settle.arm(now);
        Some(selection)
    }

    /// Drop the pending brush without committing.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            trace!("brush cancelled");
        }
    }

    /// Set the brush programmatically in domain units and commit it.
    ///
    /// A selection with a non-finite bound is ignored, like a non-finite drag;
    /// the current selection is returned unchanged.
    pub fn select(&mut self, selection: Selection) -> Selection {
        if !selection.is_finite() {
            trace!(%selection, "non-finite selection ignored");
            return self.selection;
        }
        let selection = selection.clamped_to(&self.domain);
        self.drag = None;
        self.edit.clear();
        self.validation = None;
        self.commit(selection);
        selection
    }

    // ── Typed edits ────────────────────────────────────────────────────

    /// Replace the text of one endpoint input and validate it live.
    ///
    /// Never changes the selection. Problems are reported through
    /// [`validation_message`](Self::validation_message).
    pub fn edit_endpoint(&mut self, endpoint: Endpoint, text: &str) {
        self.edit.set(endpoint, text);
        self.validation = self.check_session(endpoint);
    }

    /// Apply both typed endpoints atomically (Enter or focus loss).
    pub fn commit_edit(&mut self) -> CommitOutcome {
        if self.edit.state() == EditState::Idle {
            return CommitOutcome::Unchanged;
        }
        let resolved = self.resolve_edit();
        self.edit.clear();
        match resolved {
            Ok(selection) => {
                self.validation = None;
                self.commit(selection);
                CommitOutcome::Committed(selection)
            }
            Err(err) => {
                debug!(error = %err, selection = %self.selection, "typed edit rejected");
                self.validation = Some(err.clone());
                CommitOutcome::Rejected(err)
            }
        }
    }

    /// Throw away typed text and any validation message (Escape).
    pub fn cancel_edit(&mut self) {
        self.edit.clear();
        self.validation = None;
    }

    // ── Host-driven domain changes ─────────────────────────────────────

    /// Replace the domain and clamp the selection into it. Never raises the listener.
    pub fn update_domain(&mut self, domain: Domain) {
        let before = self.selection;
        self.domain = domain;
        self.selection = before.clamped_to(&domain);
        if self.edit.state() == EditState::Editing {
            // Recheck against the new bounds; keep whatever was being typed.
            self.validation = self.check_session(Endpoint::Start);
        }
        debug!(
            min = domain.min(),
            max = domain.max(),
            selection = %self.selection,
            "domain updated"
        );
    }

    /// True once after the settle delay that follows a committed drag.
    pub fn poll_settle(&mut self, now: Instant) -> bool {
        self.settle.poll(now)
    }

    // ── Read-only accessors for views ──────────────────────────────────

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn scale(&self) -> LinearScale {
        LinearScale::new(&self.domain, &self.geometry)
    }

    /// Last committed selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Live brush in domain units, clamped, while a drag is in progress.
    pub fn pending_selection(&self) -> Option<Selection> {
        let (x0, x1) = self.drag?;
        let scale = self.scale();
        Some(Selection::new(
            self.domain.clamp(scale.pixel_to_domain(x0)),
            self.domain.clamp(scale.pixel_to_domain(x1)),
        ))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Track pixel positions of both handles (live brush if dragging).
    pub fn handle_pixels(&self) -> (f64, f64) {
        let shown = self.pending_selection().unwrap_or(self.selection);
        let scale = self.scale();
        (scale.domain_to_pixel(shown.start), scale.domain_to_pixel(shown.end))
    }

    /// Text for an endpoint input: the typed text while editing, else the shown value.
    pub fn endpoint_text(&self, endpoint: Endpoint) -> String {
        if let Some(buffer) = self.edit.buffer(endpoint) {
            return buffer.text.clone();
        }
        let shown = self.pending_selection().unwrap_or(self.selection);
        format_value(shown.get(endpoint))
    }

    pub fn edit_buffer(&self, endpoint: Endpoint) -> Option<&EditBuffer> {
        self.edit.buffer(endpoint)
    }

    pub fn edit_state(&self) -> EditState {
        self.edit.state()
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        self.validation.as_ref()
    }

    pub fn validation_message(&self) -> Option<String> {
        self.validation.as_ref().map(ToString::to_string)
    }

    pub fn settle_pending(&self) -> bool {
        self.settle.is_pending()
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn commit(&mut self, selection: Selection) {
        if !selection.is_within(&self.domain) {
            debug_assert!(false, "commit outside the domain: {selection}");
            warn!(%selection, "refusing to commit a selection outside the domain");
            return;
        }
        self.selection = selection;
        debug!(start = selection.start, end = selection.end, "selection committed");
        (self.on_commit)(selection);
    }

    /// Live check of the edit session; `focus` reports first on parse errors.
    fn check_session(&self, focus: Endpoint) -> Option<ValidationError> {
        for endpoint in [focus, focus.other()] {
            if let Some(buffer) = self.edit.buffer(endpoint) {
                if !buffer.valid {
                    return Some(ValidationError::Parse {
                        endpoint,
                        text: buffer.text.clone(),
                    });
                }
            }
        }
        let start = self
            .domain
            .clamp(self.edit.pending_value(Endpoint::Start, &self.selection));
        let end = self
            .domain
            .clamp(self.edit.pending_value(Endpoint::End, &self.selection));
        if start > end {
            return Some(ValidationError::OrderViolation { start, end });
        }
        None
    }

    /// Resolve both endpoints for a commit; typed values are clamped, not rejected.
    fn resolve_edit(&self) -> Result<Selection, ValidationError> {
        let resolve = |endpoint: Endpoint| -> Result<f64, ValidationError> {
            let value = match self.edit.buffer(endpoint) {
                Some(buffer) => buffer.value().ok_or_else(|| ValidationError::Parse {
                    endpoint,
                    text: buffer.text.clone(),
                })?,
                None => self.selection.get(endpoint),
            };
            Ok(self.domain.clamp(value))
        };
        let start = resolve(Endpoint::Start)?;
        let end = resolve(Endpoint::End)?;
        if start > end {
            return Err(ValidationError::OrderViolation { start, end });
        }
        Ok(Selection::new(start, end))
    }
}
