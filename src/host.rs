//! Host-level key event source.
//!
//! `KeyboardHub` stands in for the toolkit's hardware keyboard: every raw key
//! event is offered to each registered handler in registration order, and the
//! event counts as handled if any handler handled it. Hosts feed it from their
//! window event loop; tests feed it directly.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::keys::{KeyEvent, KeyEventResult};

pub type KeyHandler = Rc<dyn Fn(&KeyEvent) -> KeyEventResult>;

/// Identifies a handler registered with [`KeyboardHub::add_handler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

#[derive(Clone, Default)]
pub struct KeyboardHub {
    handlers: Rc<RefCell<Vec<(HandlerId, KeyHandler)>>>,
    next_id: Rc<Cell<u64>>,
}

impl fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHub")
            .field("handlers", &self.handlers.borrow().len())
            .finish()
    }
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&self, handler: impl Fn(&KeyEvent) -> KeyEventResult + 'static) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_handler(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handlers, &other.handlers)
    }

    /// Offer `event` to every handler. Handlers may add or remove handlers
    /// while running; changes apply from the next event.
    pub fn dispatch(&self, event: &KeyEvent) -> KeyEventResult {
        let handlers: Vec<KeyHandler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        let mut result = KeyEventResult::Ignored;
        for handler in handlers {
            if handler(event).is_handled() {
                result = KeyEventResult::Handled;
            }
        }
        result
    }
}
