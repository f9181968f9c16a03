use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording(tracker: &RouteModalTracker) -> Rc<RefCell<Vec<ModalTransition>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    tracker.subscribe(move |transition| sink.borrow_mut().push(transition));
    log
}

#[test]
fn modal_kinds_are_modal() {
    let tracker = RouteModalTracker::new();
    for kind in [
        RouteKind::Dialog,
        RouteKind::Popup,
        RouteKind::RawDialog,
        RouteKind::BottomSheet,
    ] {
        assert!(tracker.is_modal_route(&RouteDescriptor::new(kind)), "{kind:?}");
    }
    assert!(!tracker.is_modal_route(&RouteDescriptor::page("/chat")));
    assert!(!tracker.is_modal_route(&RouteDescriptor::new(RouteKind::Other)));
}

#[test]
fn name_fallback_is_case_sensitive_substring() {
    let tracker = RouteModalTracker::new();
    assert!(tracker.is_modal_route(&RouteDescriptor::named(RouteKind::Other, "confirm_dialog")));
    assert!(tracker.is_modal_route(&RouteDescriptor::page("/settings/dialog")));
    assert!(!tracker.is_modal_route(&RouteDescriptor::page("ConfirmDialog")));
}

#[test]
fn custom_name_hint_replaces_default() {
    let tracker = RouteModalTracker::with_name_hint("sheet");
    assert!(tracker.is_modal_route(&RouteDescriptor::page("share-sheet")));
    assert!(!tracker.is_modal_route(&RouteDescriptor::page("confirm_dialog")));

    let disabled = RouteModalTracker::with_name_hint("");
    assert!(!disabled.is_modal_route(&RouteDescriptor::page("confirm_dialog")));
}

#[test]
fn push_and_pop_emit_one_transition_each() {
    let tracker = RouteModalTracker::new();
    let log = recording(&tracker);
    let home = RouteDescriptor::page("/");

    tracker.did_push(&RouteDescriptor::dialog(), Some(&home));
    tracker.did_push(&RouteDescriptor::new(RouteKind::Popup), None);
    assert_eq!(tracker.open_modal_count(), 2);

    tracker.did_pop(&RouteDescriptor::new(RouteKind::Popup), None);
    tracker.did_remove(&RouteDescriptor::dialog(), Some(&home));
    assert_eq!(tracker.open_modal_count(), 0);
    assert!(!tracker.has_open_modal());

    assert_eq!(
        *log.borrow(),
        vec![
            ModalTransition::Opened,
            ModalTransition::Opened,
            ModalTransition::Closed,
            ModalTransition::Closed,
        ]
    );
}

#[test]
fn page_routes_are_ignored() {
    let tracker = RouteModalTracker::new();
    let log = recording(&tracker);
    tracker.did_push(&RouteDescriptor::page("/chat"), None);
    tracker.did_pop(&RouteDescriptor::page("/chat"), None);
    assert_eq!(tracker.open_modal_count(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn count_is_clamped_at_zero() {
    let tracker = RouteModalTracker::new();
    let log = recording(&tracker);
    tracker.did_pop(&RouteDescriptor::dialog(), None);
    assert_eq!(tracker.open_modal_count(), 0);
    assert_eq!(*log.borrow(), vec![ModalTransition::Closed]);
}

#[test]
fn replace_can_close_and_open_in_one_call() {
    let tracker = RouteModalTracker::new();
    tracker.did_push(&RouteDescriptor::dialog(), None);
    let log = recording(&tracker);

    tracker.did_replace(
        Some(&RouteDescriptor::new(RouteKind::BottomSheet)),
        Some(&RouteDescriptor::dialog()),
    );
    assert_eq!(tracker.open_modal_count(), 1);
    assert_eq!(
        *log.borrow(),
        vec![ModalTransition::Closed, ModalTransition::Opened]
    );
}

#[test]
fn replace_promotes_and_demotes() {
    let tracker = RouteModalTracker::new();
    tracker.did_replace(Some(&RouteDescriptor::dialog()), Some(&RouteDescriptor::page("/")));
    assert_eq!(tracker.open_modal_count(), 1);
    tracker.did_replace(Some(&RouteDescriptor::page("/")), Some(&RouteDescriptor::dialog()));
    assert_eq!(tracker.open_modal_count(), 0);
    tracker.did_replace(None, None);
    assert_eq!(tracker.open_modal_count(), 0);
}

#[test]
fn listeners_see_updated_count_and_can_unsubscribe() {
    let tracker = RouteModalTracker::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let observer = tracker.clone();
    let id = tracker.subscribe(move |_| sink.borrow_mut().push(observer.open_modal_count()));

    tracker.did_push(&RouteDescriptor::dialog(), None);
    assert!(tracker.unsubscribe(id));
    assert!(!tracker.unsubscribe(id));
    tracker.did_pop(&RouteDescriptor::dialog(), None);

    assert_eq!(*seen.borrow(), vec![1]);
}
