//! Counts open modal routes and tells subscribers when one opens or closes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::route::RouteDescriptor;
use crate::config::DEFAULT_MODAL_NAME_HINT;

/// Edge-triggered notification: one per increment or decrement of the count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    Opened,
    Closed,
}

/// Identifies a listener registered with [`RouteModalTracker::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(ModalTransition)>;

struct TrackerState {
    open_modal_count: usize,
    name_hint: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

/// Observer of the navigation stack.
///
/// Cloning yields another handle to the same tracker. The host forwards its
/// navigator notifications to the `did_*` methods.
#[derive(Clone)]
pub struct RouteModalTracker {
    state: Rc<RefCell<TrackerState>>,
}

impl Default for RouteModalTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RouteModalTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("RouteModalTracker")
            .field("open_modal_count", &state.open_modal_count)
            .field("name_hint", &state.name_hint)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl RouteModalTracker {
    pub fn new() -> Self {
        Self::with_name_hint(DEFAULT_MODAL_NAME_HINT)
    }

    /// Tracker whose name fallback looks for `hint` instead of `"dialog"`.
    /// An empty hint disables the fallback.
    pub fn with_name_hint(hint: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(TrackerState {
                open_modal_count: 0,
                name_hint: hint.into(),
                listeners: Vec::new(),
                next_subscription: 0,
            })),
        }
    }

    pub fn open_modal_count(&self) -> usize {
        self.state.borrow().open_modal_count
    }

    pub fn has_open_modal(&self) -> bool {
        self.open_modal_count() > 0
    }

    /// Whether two handles refer to the same tracker.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Modal iff the kind is a dialog/popup/bottom-sheet, or the route name
    /// contains the name hint (case-sensitive). The name check is a heuristic
    /// for custom route types and can match unrelated routes.
    pub fn is_modal_route(&self, route: &RouteDescriptor) -> bool {
        if route.kind.is_modal() {
            return true;
        }
        let state = self.state.borrow();
        if state.name_hint.is_empty() {
            return false;
        }
        route
            .name
            .as_deref()
            .is_some_and(|name| name.contains(state.name_hint.as_str()))
    }

    pub fn did_push(&self, route: &RouteDescriptor, previous: Option<&RouteDescriptor>) {
        trace!(route = ?route, previous = ?previous, "route pushed");
        if self.is_modal_route(route) {
            self.opened();
        }
    }

    pub fn did_pop(&self, route: &RouteDescriptor, previous: Option<&RouteDescriptor>) {
        trace!(route = ?route, previous = ?previous, "route popped");
        if self.is_modal_route(route) {
            self.closed();
        }
    }

    pub fn did_remove(&self, route: &RouteDescriptor, previous: Option<&RouteDescriptor>) {
        trace!(route = ?route, previous = ?previous, "route removed");
        if self.is_modal_route(route) {
            self.closed();
        }
    }

    /// Replacement is a pop of `old_route` followed by a push of `new_route`.
    pub fn did_replace(
        &self,
        new_route: Option<&RouteDescriptor>,
        old_route: Option<&RouteDescriptor>,
    ) {
        trace!(new_route = ?new_route, old_route = ?old_route, "route replaced");
        if old_route.is_some_and(|route| self.is_modal_route(route)) {
            self.closed();
        }
        if new_route.is_some_and(|route| self.is_modal_route(route)) {
            self.opened();
        }
    }

    pub fn subscribe(&self, listener: impl Fn(ModalTransition) + 'static) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        state.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    fn opened(&self) {
        let count = {
            let mut state = self.state.borrow_mut();
            state.open_modal_count += 1;
            state.open_modal_count
        };
        debug!(open_modal_count = count, "modal opened");
        self.notify(ModalTransition::Opened);
    }

    fn closed(&self) {
        let count = {
            let mut state = self.state.borrow_mut();
            state.open_modal_count = state.open_modal_count.saturating_sub(1);
            state.open_modal_count
        };
        debug!(open_modal_count = count, "modal closed");
        self.notify(ModalTransition::Closed);
    }

    // Listeners are cloned out first so they may call back into the tracker.
    fn notify(&self, transition: ModalTransition) {
        let listeners: Vec<Listener> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(transition);
        }
    }
}
