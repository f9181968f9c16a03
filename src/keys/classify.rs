//! Typing-key classification.
//!
//! A key-down is "typing" when it would ordinarily put text into (or remove
//! text from) an input field: letters, digits, punctuation, space, Backspace
//! and Delete. Navigation, shortcuts and bare modifiers are not.

use super::types::{KeyEvent, NamedKey};

/// How the router should apply a typing key to the text target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingKind {
    Backspace,
    Delete,
    /// Insert the event's produced text
    Insert,
}

/// Classify a key event. Returns `None` for anything that is not typing.
pub fn typing_kind(event: &KeyEvent) -> Option<TypingKind> {
    let mods = event.modifiers;
    if mods.meta || mods.ctrl || mods.alt {
        return None;
    }

    match event.logical.named() {
        Some(NamedKey::Backspace) => Some(TypingKind::Backspace),
        Some(NamedKey::Delete) => Some(TypingKind::Delete),
        Some(named) if is_excluded(named) => None,
        _ => Some(TypingKind::Insert),
    }
}

pub fn is_typing_key(event: &KeyEvent) -> bool {
    typing_kind(event).is_some()
}

fn is_excluded(named: NamedKey) -> bool {
    matches!(named, NamedKey::Escape | NamedKey::Tab | NamedKey::Enter)
        || named.is_arrow()
        || named.is_function()
        || named.is_modifier()
        || named.is_navigation()
}
