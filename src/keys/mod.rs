//! Keyboard event model shared by the router, the shortcut table and hosts.

mod classify;
mod types;


pub use classify::{is_typing_key, typing_kind, TypingKind};
pub use types::{
    canonicalize_key, KeyEvent, KeyEventKind, KeyEventResult, LogicalKey, Modifiers, NamedKey,
    PhysicalKey,
};
