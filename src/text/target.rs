//! Collaborator interfaces for the typing surface, plus in-memory
//! implementations for hosts that keep focus and text state themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::editing::TextEditingValue;

/// Focus side of the typing surface.
pub trait FocusHandle {
    /// Whether the surface currently holds native input focus.
    fn has_focus(&self) -> bool;
    /// Ask the host to move input focus to the surface.
    fn request_focus(&self);
}

/// Text side of the typing surface.
pub trait TextBuffer {
    fn value(&self) -> TextEditingValue;
    fn set_value(&self, value: TextEditingValue);
}

/// Focus flag that grants focus immediately on request.
///
/// An optional listener runs on every request, so a host can forward it to
/// its own focus system.
#[derive(Default)]
pub struct FocusNode {
    focused: Cell<bool>,
    requests: Cell<usize>,
    on_request: RefCell<Option<Box<dyn Fn()>>>,
}

impl FocusNode {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn set_focused(&self, focused: bool) {
        self.focused.set(focused);
    }

    pub fn blur(&self) {
        self.focused.set(false);
    }

    /// Number of `request_focus` calls seen so far.
    pub fn focus_requests(&self) -> usize {
        self.requests.get()
    }

    pub fn set_on_request(&self, listener: impl Fn() + 'static) {
        *self.on_request.borrow_mut() = Some(Box::new(listener));
    }
}

impl FocusHandle for FocusNode {
    fn has_focus(&self) -> bool {
        self.focused.get()
    }

    fn request_focus(&self) {
        self.requests.set(self.requests.get() + 1);
        self.focused.set(true);
        if let Some(listener) = self.on_request.borrow().as_ref() {
            listener();
        }
    }
}

/// Text buffer backed by a `RefCell`.
#[derive(Debug, Default)]
pub struct TextController {
    value: RefCell<TextEditingValue>,
}

impl TextController {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_value(value: TextEditingValue) -> Rc<Self> {
        Rc::new(Self {
            value: RefCell::new(value),
        })
    }

    pub fn text(&self) -> String {
        self.value.borrow().text.clone()
    }

    pub fn clear(&self) {
        *self.value.borrow_mut() = TextEditingValue::default();
    }
}

impl TextBuffer for TextController {
    fn value(&self) -> TextEditingValue {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: TextEditingValue) {
        *self.value.borrow_mut() = value;
    }
}
