//! The global key router.
//!
//! Every raw key event from the host passes through `handle_key_event`. While
//! the typing surface is registered but not focused, typing keys are
//! redirected into it: focus is requested and the text buffer is edited
//! directly, so the first keystroke is not lost. Global shortcuts are
//! dispatched before any of that. Suspension (explicit, or on behalf of an
//! open modal route) turns the whole router into a pass-through.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::panic::Location;
use std::rc::{Rc, Weak};

use tracing::{debug, info, trace, warn};

use super::suspension::{ResumeHandle, SuspendCounter};
use crate::config::Config;
use crate::error::Result;
use crate::host::{HandlerId, KeyboardHub};
use crate::keys::{typing_kind, KeyEvent, KeyEventKind, KeyEventResult, PhysicalKey, TypingKind};
use crate::logging;
use crate::modal::{ModalTransition, RouteModalTracker, SubscriptionId};
use crate::shortcuts::{ShortcutAction, ShortcutBinding, ShortcutMatch, ShortcutTable};
use crate::text::{FocusHandle, TextBuffer, TextEditingValue};

#[derive(Clone)]
struct RegisteredTarget {
    focus: Rc<dyn FocusHandle>,
    buffer: Rc<dyn TextBuffer>,
}

struct ModalConnection {
    tracker: RouteModalTracker,
    subscription: SubscriptionId,
}

struct RouterState {
    handled_physical_keys: HashSet<PhysicalKey>,
    target: Option<RegisteredTarget>,
    shortcuts: ShortcutTable,
    modal: Option<ModalConnection>,
    /// Present iff the router suspended itself because a modal is open
    modal_resume: Option<ResumeHandle>,
    attached: Option<(KeyboardHub, HandlerId)>,
    trace_key_events: bool,
}

struct RouterInner {
    suspension: SuspendCounter,
    state: RefCell<RouterState>,
}

/// Explicitly owned router; clones are handles to the same instance.
///
/// Create one per application window, hand clones to the widgets that need
/// to register a target or suspend interception, and call [`dispose`] when
/// the window goes away.
///
/// [`dispose`]: GlobalKeyRouter::dispose
#[derive(Clone)]
pub struct GlobalKeyRouter {
    inner: Rc<RouterInner>,
}

impl Default for GlobalKeyRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GlobalKeyRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("GlobalKeyRouter")
            .field("suspend_count", &self.inner.suspension.depth())
            .field("suspended_for_modal", &state.modal_resume.is_some())
            .field("handled_physical_keys", &state.handled_physical_keys.len())
            .field("has_target", &state.target.is_some())
            .field("shortcuts", &state.shortcuts)
            .finish()
    }
}

impl GlobalKeyRouter {
    pub fn new() -> Self {
        Self::with_shortcuts(ShortcutTable::default())
    }

    pub fn with_shortcuts(shortcuts: ShortcutTable) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                suspension: SuspendCounter::default(),
                state: RefCell::new(RouterState {
                    handled_physical_keys: HashSet::new(),
                    target: None,
                    shortcuts,
                    modal: None,
                    modal_resume: None,
                    attached: None,
                    trace_key_events: false,
                }),
            }),
        }
    }

    /// Router with the shortcut bindings and logging options from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let router = Self::with_shortcuts(ShortcutTable::new(config.shortcut_bindings()?));
        router.set_trace_key_events(config.trace_key_events);
        Ok(router)
    }

    fn from_weak(inner: &Weak<RouterInner>) -> Option<Self> {
        inner.upgrade().map(|inner| Self { inner })
    }

    // === Host lifecycle ===

    /// Install the router as a handler on `hub`. Attaching again moves it.
    pub fn attach(&self, hub: &KeyboardHub) {
        self.detach();
        let weak = Rc::downgrade(&self.inner);
        let id = hub.add_handler(move |event| match GlobalKeyRouter::from_weak(&weak) {
            Some(router) => router.handle_key_event(event),
            None => KeyEventResult::Ignored,
        });
        self.inner.state.borrow_mut().attached = Some((hub.clone(), id));
        info!(event_type = "router_lifecycle", action = "attached", "Key router attached");
    }

    /// Remove the router's handler from its hub, if attached.
    pub fn detach(&self) -> bool {
        let attached = self.inner.state.borrow_mut().attached.take();
        match attached {
            Some((hub, id)) => {
                hub.remove_handler(id);
                info!(event_type = "router_lifecycle", action = "detached", "Key router detached");
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.state.borrow().attached.is_some()
    }

    /// Tear down: detach from the host, drop the modal connection (releasing
    /// any modal suspension), the target and all shortcut callbacks.
    /// Suspensions held by other callers are left untouched.
    pub fn dispose(&self) {
        self.detach();
        let tracker = self
            .inner
            .state
            .borrow()
            .modal
            .as_ref()
            .map(|connection| connection.tracker.clone());
        if let Some(tracker) = tracker {
            self.disconnect_modal_tracker(&tracker);
        }
        let mut state = self.inner.state.borrow_mut();
        state.target = None;
        state.shortcuts.clear_callbacks();
        state.handled_physical_keys.clear();
        info!(event_type = "router_lifecycle", action = "disposed", "Key router disposed");
    }

    // === Target registration ===

    /// Register the typing surface. Replaces any previous registration.
    pub fn register_target(&self, focus: Rc<dyn FocusHandle>, buffer: Rc<dyn TextBuffer>) {
        let mut state = self.inner.state.borrow_mut();
        if state.target.is_some() {
            debug!("Replacing registered text target");
        }
        state.target = Some(RegisteredTarget { focus, buffer });
        info!(event_type = "router_target", action = "registered", "Text target registered");
    }

    /// Unregister `focus` if it is the current target. A stale handle from a
    /// disposed widget leaves a newer registration alone.
    pub fn unregister_target<F: FocusHandle + ?Sized>(&self, focus: &Rc<F>) -> bool {
        let mut state = self.inner.state.borrow_mut();
        let is_current = state
            .target
            .as_ref()
            .is_some_and(|target| std::ptr::addr_eq(Rc::as_ptr(&target.focus), Rc::as_ptr(focus)));
        if !is_current {
            debug!("Ignoring unregister for a target that is not registered");
            return false;
        }
        state.target = None;
        state.handled_physical_keys.clear();
        info!(event_type = "router_target", action = "unregistered", "Text target unregistered");
        true
    }

    pub fn has_target(&self) -> bool {
        self.inner.state.borrow().target.is_some()
    }

    // === Shortcuts ===

    pub fn set_shortcut_callback(&self, action: ShortcutAction, callback: impl Fn() + 'static) {
        self.inner
            .state
            .borrow_mut()
            .shortcuts
            .set_callback(action, Rc::new(callback));
    }

    pub fn clear_shortcut_callback(&self, action: ShortcutAction) -> bool {
        self.inner.state.borrow_mut().shortcuts.clear_callback(action)
    }

    pub fn set_shortcut_bindings(&self, bindings: Vec<ShortcutBinding>) {
        self.inner.state.borrow_mut().shortcuts.set_bindings(bindings);
    }

    pub fn set_trace_key_events(&self, enabled: bool) {
        self.inner.state.borrow_mut().trace_key_events = enabled;
    }

    // === Suspension ===

    /// Suspend interception until the returned handle is resumed.
    ///
    /// Suspensions nest: N outstanding handles need N resumes. The caller's
    /// source location is logged for diagnosing leaked suspensions.
    #[track_caller]
    pub fn suspend(&self) -> ResumeHandle {
        let caller = Location::caller();
        let handle = self.inner.suspension.acquire();
        self.inner.state.borrow_mut().handled_physical_keys.clear();
        debug!(
            suspend_count = self.suspend_count(),
            file = caller.file(),
            line = caller.line(),
            "key interception suspended"
        );
        handle
    }

    pub fn suspend_count(&self) -> usize {
        self.inner.suspension.depth()
    }

    pub fn is_active(&self) -> bool {
        self.suspend_count() == 0
    }

    pub fn is_suspended_for_modal(&self) -> bool {
        self.inner.state.borrow().modal_resume.is_some()
    }

    // === Modal tracking ===

    /// Follow `tracker`'s modal transitions. Suspends right away if a modal
    /// is already open. Replaces any previously connected tracker.
    pub fn connect_modal_tracker(&self, tracker: &RouteModalTracker) {
        let previous = self
            .inner
            .state
            .borrow()
            .modal
            .as_ref()
            .map(|connection| connection.tracker.clone());
        if let Some(previous) = previous {
            if previous.ptr_eq(tracker) {
                debug!("Modal tracker already connected");
                return;
            }
            self.disconnect_modal_tracker(&previous);
        }

        let weak = Rc::downgrade(&self.inner);
        let subscription = tracker.subscribe(move |transition| {
            if let Some(router) = GlobalKeyRouter::from_weak(&weak) {
                router.on_modal_transition(transition);
            }
        });
        self.inner.state.borrow_mut().modal = Some(ModalConnection {
            tracker: tracker.clone(),
            subscription,
        });
        debug!(
            open_modal_count = tracker.open_modal_count(),
            "Modal tracker connected"
        );

        if tracker.has_open_modal() {
            self.suspend_for_modal();
        }
    }

    /// Stop following `tracker`. Always releases a modal suspension, even if
    /// the tracker still reports open modals. No-op for a foreign tracker.
    pub fn disconnect_modal_tracker(&self, tracker: &RouteModalTracker) -> bool {
        let connection = {
            let mut state = self.inner.state.borrow_mut();
            match state.modal.as_ref() {
                Some(connection) if connection.tracker.ptr_eq(tracker) => state.modal.take(),
                _ => None,
            }
        };
        let Some(connection) = connection else {
            debug!("Ignoring disconnect for a tracker that is not connected");
            return false;
        };
        connection.tracker.unsubscribe(connection.subscription);
        self.resume_for_modal();
        debug!("Modal tracker disconnected");
        true
    }

    fn on_modal_transition(&self, transition: ModalTransition) {
        match transition {
            ModalTransition::Opened => self.suspend_for_modal(),
            ModalTransition::Closed => {
                let still_open = self
                    .inner
                    .state
                    .borrow()
                    .modal
                    .as_ref()
                    .is_some_and(|connection| connection.tracker.has_open_modal());
                if still_open {
                    trace!("Modal closed but another is still open");
                } else {
                    self.resume_for_modal();
                }
            }
        }
    }

    fn suspend_for_modal(&self) {
        if self.is_suspended_for_modal() {
            trace!("Already suspended for modal");
            return;
        }
        let handle = self.suspend();
        self.inner.state.borrow_mut().modal_resume = Some(handle);
    }

    fn resume_for_modal(&self) {
        let handle = self.inner.state.borrow_mut().modal_resume.take();
        if let Some(handle) = handle {
            handle.resume();
        }
    }

    // === Event processing ===

    /// Whether `key` is currently remembered as consumed by the router.
    pub fn is_key_handled(&self, key: PhysicalKey) -> bool {
        self.inner.state.borrow().handled_physical_keys.contains(&key)
    }

    pub fn handled_key_count(&self) -> usize {
        self.inner.state.borrow().handled_physical_keys.len()
    }

    /// Offer one raw key event to the router.
    pub fn handle_key_event(&self, event: &KeyEvent) -> KeyEventResult {
        let (result, reason) = self.route(event);
        let verbose = self.inner.state.borrow().trace_key_events;
        logging::log_key_decision(event, result, reason, verbose);
        result
    }

    fn route(&self, event: &KeyEvent) -> (KeyEventResult, &'static str) {
        use KeyEventResult::{Handled, Ignored};

        if !self.is_active() {
            self.inner.state.borrow_mut().handled_physical_keys.clear();
            return (Ignored, "suspended");
        }

        match event.kind {
            KeyEventKind::Down => {
                let hit = self.inner.state.borrow().shortcuts.find_match(event);
                if let Some(ShortcutMatch {
                    action,
                    callback: Some(callback),
                }) = hit
                {
                    debug!(action = action.name(), "Shortcut fired");
                    callback();
                    return (Handled, "shortcut");
                }
            }
            KeyEventKind::Up => {
                self.inner
                    .state
                    .borrow_mut()
                    .handled_physical_keys
                    .remove(&event.physical);
            }
            KeyEventKind::Repeat => {}
        }

        let Some(target) = self.inner.state.borrow().target.clone() else {
            return (Ignored, "no_target");
        };

        if target.focus.has_focus() {
            self.inner.state.borrow_mut().handled_physical_keys.clear();
            return (Ignored, "target_focused");
        }

        match event.kind {
            KeyEventKind::Up => return (Ignored, "key_up"),
            KeyEventKind::Repeat => return (Ignored, "key_repeat"),
            KeyEventKind::Down => {}
        }

        if self.is_key_handled(event.physical) {
            return (Ignored, "already_handled");
        }

        let Some(kind) = typing_kind(event) else {
            return (Ignored, "not_typing");
        };

        match kind {
            TypingKind::Backspace => {
                self.redirect(&target, event.physical, TextEditingValue::backspace);
                (Handled, "backspace")
            }
            TypingKind::Delete => {
                self.redirect(&target, event.physical, TextEditingValue::delete_forward);
                (Handled, "delete")
            }
            TypingKind::Insert => {
                let Some(text) = event.produced_text() else {
                    target.focus.request_focus();
                    return (Ignored, "no_character");
                };
                self.redirect(&target, event.physical, |value| {
                    value.insert_str(text);
                    true
                });
                (Handled, "insert")
            }
        }
    }

    /// Mark the key handled, pull focus to the target, then apply `edit`.
    fn redirect(
        &self,
        target: &RegisteredTarget,
        physical: PhysicalKey,
        edit: impl FnOnce(&mut TextEditingValue) -> bool,
    ) {
        self.inner
            .state
            .borrow_mut()
            .handled_physical_keys
            .insert(physical);
        target.focus.request_focus();

        let mut value = target.buffer.value();
        if edit(&mut value) {
            target.buffer.set_value(value);
        }
    }
}

impl Drop for RouterInner {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        if let Some((hub, id)) = state.attached.take() {
            hub.remove_handler(id);
        }
        if let Some(connection) = state.modal.take() {
            connection.tracker.unsubscribe(connection.subscription);
        }
        if self.suspension.depth() > usize::from(state.modal_resume.is_some()) {
            warn!(
                suspend_count = self.suspension.depth(),
                "Key router dropped with outstanding suspensions"
            );
        }
    }
}
