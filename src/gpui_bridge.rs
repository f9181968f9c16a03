//! Conversion from gpui key events.
//!
//! gpui does not expose scan codes, so the physical key is derived from the
//! unmodified key name. That is stable for a given layout, which is all the
//! handled-key set needs between a key-down and its key-up.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::keys::{KeyEvent, KeyEventKind, LogicalKey, Modifiers, PhysicalKey};

fn modifiers(keystroke: &gpui::Keystroke) -> Modifiers {
    Modifiers {
        meta: keystroke.modifiers.platform,
        ctrl: keystroke.modifiers.control,
        alt: keystroke.modifiers.alt,
        shift: keystroke.modifiers.shift,
    }
}

fn physical_key(key: &str) -> PhysicalKey {
    let mut hasher = DefaultHasher::new();
    key.to_lowercase().hash(&mut hasher);
    PhysicalKey(hasher.finish())
}

fn from_keystroke(keystroke: &gpui::Keystroke, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        kind,
        physical: physical_key(&keystroke.key),
        logical: LogicalKey::from_name(&keystroke.key),
        character: keystroke.key_char.clone(),
        modifiers: modifiers(keystroke),
    }
}

impl From<&gpui::KeyDownEvent> for KeyEvent {
    fn from(event: &gpui::KeyDownEvent) -> Self {
        let kind = if event.is_held {
            KeyEventKind::Repeat
        } else {
            KeyEventKind::Down
        };
        from_keystroke(&event.keystroke, kind)
    }
}

impl From<&gpui::KeyUpEvent> for KeyEvent {
    fn from(event: &gpui::KeyUpEvent) -> Self {
        let mut key_event = from_keystroke(&event.keystroke, KeyEventKind::Up);
        key_event.character = None;
        key_event
    }
}
