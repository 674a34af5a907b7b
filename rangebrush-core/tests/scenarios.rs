//! End-to-end widget sessions against the default 250px geometry.
//!
//! Each test drives the selector the way a host would (pointer, keyboard,
//! focus) and checks both the committed selection and the commit events.

use std::sync::mpsc::{self, Receiver};

use rangebrush_core::{
    CommitOutcome, Domain, Endpoint, EditState, Geometry, RangeSelector, Selection,
};

fn selector(initial: Option<Selection>) -> (RangeSelector, Receiver<Selection>) {
    let (tx, rx) = mpsc::channel();
    let domain = Domain::new(0.0, 20.0).unwrap();
    let selector = RangeSelector::new(domain, Geometry::default(), initial, move |s| {
        tx.send(s).unwrap();
    });
    (selector, rx)
}

#[test]
fn no_initial_selection_selects_whole_domain() {
    let (sel, rx) = selector(None);

    assert_eq!(sel.selection(), Selection::new(0.0, 20.0));
    // Handles sit at both ends of the 215px track
    assert_eq!(sel.handle_pixels(), (0.0, 215.0));
    assert!(rx.try_recv().is_err());
}

#[test]
fn drag_over_whole_track_commits_full_domain_once() {
    let (mut sel, rx) = selector(Some(Selection::new(5.0, 15.0)));
    let scale = sel.scale();

    sel.drag_to(scale.domain_to_pixel(0.0), scale.domain_to_pixel(20.0));
    assert!(rx.try_recv().is_err());
    sel.end_drag();

    assert_eq!(sel.selection(), Selection::new(0.0, 20.0));
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Selection::new(0.0, 20.0)]);
    assert_eq!(sel.endpoint_text(Endpoint::Start), "0");
    assert_eq!(sel.endpoint_text(Endpoint::End), "20");
}

#[test]
fn typed_range_submitted_with_enter() {
    let (mut sel, rx) = selector(Some(Selection::new(5.0, 15.0)));

    sel.edit_endpoint(Endpoint::End, "10");
    sel.edit_endpoint(Endpoint::Start, "8");
    let outcome = sel.commit_edit();

    assert_eq!(outcome, CommitOutcome::Committed(Selection::new(8.0, 10.0)));
    assert_eq!(sel.selection(), Selection::new(8.0, 10.0));
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Selection::new(8.0, 10.0)]);
}

#[test]
fn typed_range_cancelled_with_escape() {
    let (mut sel, rx) = selector(Some(Selection::new(5.0, 15.0)));

    sel.edit_endpoint(Endpoint::Start, "7");
    sel.cancel_edit();

    assert_eq!(sel.selection(), Selection::new(5.0, 15.0));
    assert_eq!(sel.endpoint_text(Endpoint::Start), "5");
    assert_eq!(sel.edit_state(), EditState::Idle);
    assert!(rx.try_recv().is_err());
}

#[test]
fn non_numeric_text_is_rejected_on_enter() {
    let (mut sel, rx) = selector(Some(Selection::new(5.0, 15.0)));

    sel.edit_endpoint(Endpoint::Start, "kjhfkjfkl");
    let outcome = sel.commit_edit();

    assert!(matches!(outcome, CommitOutcome::Rejected(_)));
    assert_eq!(sel.selection(), Selection::new(5.0, 15.0));
    assert_eq!(sel.validation_message().as_deref(), Some("Invalid Entered Value"));
    assert!(rx.try_recv().is_err());

    sel.cancel_edit();
    assert_eq!(sel.validation_message(), None);
    assert_eq!(sel.endpoint_text(Endpoint::Start), "5");
}

#[test]
fn typed_range_submitted_with_blur_reaches_listener() {
    let (mut sel, rx) = selector(Some(Selection::new(5.0, 15.0)));

    sel.edit_endpoint(Endpoint::Start, "7");
    // Focus loss goes through the same commit path as Enter
    sel.commit_edit();

    assert_eq!(sel.selection(), Selection::new(7.0, 15.0));
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Selection::new(7.0, 15.0)]);
}

#[test]
fn out_of_range_typed_values_clamp_to_bounds() {
    let (mut sel, rx) = selector(Some(Selection::new(5.0, 15.0)));

    sel.edit_endpoint(Endpoint::Start, "-3");
    sel.commit_edit();
    assert_eq!(sel.selection(), Selection::new(0.0, 15.0));

    sel.edit_endpoint(Endpoint::End, "99");
    sel.commit_edit();
    assert_eq!(sel.selection(), Selection::new(0.0, 20.0));

    assert_eq!(rx.try_iter().count(), 2);
}

#[test]
fn domain_change_clamps_silently() {
    let (mut sel, rx) = selector(Some(Selection::new(5.0, 15.0)));

    sel.update_domain(Domain::new(10.0, 12.0).unwrap());

    assert_eq!(sel.selection(), Selection::new(10.0, 12.0));
    assert!(rx.try_recv().is_err());
}

#[test]
fn listener_can_queue_domain_update_for_next_turn() {
    // The listener cannot reach the selector; it hands work to the host loop instead.
    let (tx, rx) = mpsc::channel::<Domain>();
    let domain = Domain::new(0.0, 20.0).unwrap();
    let mut sel = RangeSelector::new(domain, Geometry::default(), None, move |s| {
        let _ = tx.send(Domain::new(s.start, s.end).unwrap());
    });

    sel.edit_endpoint(Endpoint::Start, "4");
    sel.edit_endpoint(Endpoint::End, "8");
    sel.commit_edit();

    // Next loop turn: zoom into the committed range
    for next in rx.try_iter() {
        sel.update_domain(next);
    }
    assert_eq!(sel.domain().min(), 4.0);
    assert_eq!(sel.domain().max(), 8.0);
    assert_eq!(sel.selection(), Selection::new(4.0, 8.0));
    assert_eq!(sel.handle_pixels(), (0.0, 215.0));
}
