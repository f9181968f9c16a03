//! Ordered shortcut table evaluated before typing redirection.
//!
//! Uses a Vec for deterministic first-match-wins ordering. A binding only
//! consumes its event when a callback is registered for its action.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::types::{Shortcut, ShortcutModifiers};
use crate::keys::{KeyEvent, LogicalKey, NamedKey};

/// Application actions reachable through global shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    Escape,
    NewWorktree,
    NewChat,
}

impl ShortcutAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::NewWorktree => "new_worktree",
            Self::NewChat => "new_chat",
        }
    }
}

/// Callback invoked when a shortcut fires.
pub type ShortcutCallback = Rc<dyn Fn()>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub action: ShortcutAction,
    pub shortcut: Shortcut,
}

/// Result of looking an event up in the table.
pub struct ShortcutMatch {
    pub action: ShortcutAction,
    /// `None` when the action matched but nothing is listening
    pub callback: Option<ShortcutCallback>,
}

pub struct ShortcutTable {
    bindings: Vec<ShortcutBinding>,
    callbacks: HashMap<ShortcutAction, ShortcutCallback>,
}

impl Default for ShortcutTable {
    fn default() -> Self {
        Self::new(vec![
            ShortcutBinding {
                action: ShortcutAction::Escape,
                shortcut: Shortcut::from(NamedKey::Escape),
            },
            ShortcutBinding {
                action: ShortcutAction::NewWorktree,
                shortcut: Shortcut::new(LogicalKey::character("n"), ShortcutModifiers::command()),
            },
            ShortcutBinding {
                action: ShortcutAction::NewChat,
                shortcut: Shortcut::new(
                    LogicalKey::character("n"),
                    ShortcutModifiers::command_shift(),
                ),
            },
        ])
    }
}

impl fmt::Debug for ShortcutTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut callbacks: Vec<&'static str> = self.callbacks.keys().map(|a| a.name()).collect();
        callbacks.sort_unstable();
        f.debug_struct("ShortcutTable")
            .field("bindings", &self.bindings)
            .field("callbacks", &callbacks)
            .finish()
    }
}

impl ShortcutTable {
    pub fn new(bindings: Vec<ShortcutBinding>) -> Self {
        Self {
            bindings,
            callbacks: HashMap::new(),
        }
    }

    pub fn bindings(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    /// Replace the bindings, keeping registered callbacks.
    pub fn set_bindings(&mut self, bindings: Vec<ShortcutBinding>) {
        self.bindings = bindings;
    }

    /// Register (or replace) the callback for an action.
    pub fn set_callback(&mut self, action: ShortcutAction, callback: ShortcutCallback) {
        self.callbacks.insert(action, callback);
    }

    pub fn clear_callback(&mut self, action: ShortcutAction) -> bool {
        self.callbacks.remove(&action).is_some()
    }

    pub fn clear_callbacks(&mut self) {
        self.callbacks.clear();
    }

    pub fn has_callback(&self, action: ShortcutAction) -> bool {
        self.callbacks.contains_key(&action)
    }

    /// First binding matching a key-down event. Other event kinds never match.
    pub fn find_match(&self, event: &KeyEvent) -> Option<ShortcutMatch> {
        if !event.is_down() {
            return None;
        }
        self.bindings
            .iter()
            .find(|binding| binding.shortcut.matches(event))
            .map(|binding| ShortcutMatch {
                action: binding.action,
                callback: self.callbacks.get(&binding.action).cloned(),
            })
    }
}
