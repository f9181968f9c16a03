//! Key event types delivered by the host keyboard source.
//!
//! This module provides:
//! - `KeyEvent` - A single key-down / repeat / key-up delivery
//! - `PhysicalKey` - Hardware key identity used for duplicate suppression
//! - `LogicalKey` - Layout-aware key identity used for shortcut matching
//! - `Modifiers` - Modifier state at the time of the event

use serde::{Deserialize, Serialize};
use std::fmt;

/// Modifier keys held while an event was delivered.
///
/// `meta` and `ctrl` are kept apart here; shortcut matching treats them as
/// one "command" modifier (see [`Modifiers::command`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Modifiers {
    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
    /// Platform accelerator: Meta on macOS, Control elsewhere. Either counts.
    pub fn command(&self) -> bool {
        self.meta || self.ctrl
    }
    pub fn any(&self) -> bool {
        self.meta || self.ctrl || self.alt || self.shift
    }
    pub fn none(&self) -> bool {
        !self.any()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();
        if self.meta {
            parts.push("meta");
        }
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.shift {
            parts.push("shift");
        }
        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Hardware-level key identity (e.g. a USB HID usage code).
///
/// Stable across keyboard layouts, so it is what the router remembers
/// between key-down and key-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysicalKey(pub u64);

impl fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Non-character keys the router needs to tell apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Escape,
    Tab,
    Enter,
    Space,
    Backspace,
    Delete,
    Insert,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function keys F1..=F24
    F(u8),
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,
    CapsLock,
}

impl NamedKey {
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::ArrowUp | Self::ArrowDown | Self::ArrowLeft | Self::ArrowRight
        )
    }

    pub fn is_function(self) -> bool {
        matches!(self, Self::F(_))
    }

    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::ShiftLeft
                | Self::ShiftRight
                | Self::ControlLeft
                | Self::ControlRight
                | Self::AltLeft
                | Self::AltRight
                | Self::MetaLeft
                | Self::MetaRight
                | Self::CapsLock
        )
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Home | Self::End | Self::PageUp | Self::PageDown)
    }

    /// Canonical lowercase name, the same spelling `LogicalKey::from_name` accepts.
    pub fn name(self) -> String {
        match self {
            Self::Escape => "escape",
            Self::Tab => "tab",
            Self::Enter => "enter",
            Self::Space => "space",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Insert => "insert",
            Self::ArrowUp => "up",
            Self::ArrowDown => "down",
            Self::ArrowLeft => "left",
            Self::ArrowRight => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PageUp => "pageup",
            Self::PageDown => "pagedown",
            Self::F(n) => return format!("f{}", n),
            Self::ShiftLeft => "shiftleft",
            Self::ShiftRight => "shiftright",
            Self::ControlLeft => "controlleft",
            Self::ControlRight => "controlright",
            Self::AltLeft => "altleft",
            Self::AltRight => "altright",
            Self::MetaLeft => "metaleft",
            Self::MetaRight => "metaright",
            Self::CapsLock => "capslock",
        }
        .to_string()
    }
}

/// Layout-aware key identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Named(NamedKey),
    /// Printable key, as produced by the current layout (e.g. "a", "N", "/")
    Character(String),
    /// The host could not identify the key
    Unidentified,
}

impl LogicalKey {
    pub fn character(s: impl Into<String>) -> Self {
        Self::Character(s.into())
    }

    pub fn named(&self) -> Option<NamedKey> {
        match self {
            Self::Named(named) => Some(*named),
            _ => None,
        }
    }

    pub fn is(&self, named: NamedKey) -> bool {
        self.named() == Some(named)
    }

    /// Case-insensitive comparison against a single character key.
    pub fn matches_char(&self, expected: &str) -> bool {
        match self {
            Self::Character(s) => s.to_lowercase() == expected.to_lowercase(),
            _ => false,
        }
    }

    /// Resolve a key name (as written in config or by a host toolkit).
    ///
    /// Named keys are resolved through [`canonicalize_key`]; anything else of
    /// exactly one character becomes `Character`. Unknown multi-character names
    /// resolve to `Unidentified`.
    pub fn from_name(name: &str) -> Self {
        let canonical = canonicalize_key(name);
        let named = match canonical.as_str() {
            "escape" => Some(NamedKey::Escape),
            "tab" => Some(NamedKey::Tab),
            "enter" => Some(NamedKey::Enter),
            "space" => Some(NamedKey::Space),
            "backspace" => Some(NamedKey::Backspace),
            "delete" => Some(NamedKey::Delete),
            "insert" => Some(NamedKey::Insert),
            "up" => Some(NamedKey::ArrowUp),
            "down" => Some(NamedKey::ArrowDown),
            "left" => Some(NamedKey::ArrowLeft),
            "right" => Some(NamedKey::ArrowRight),
            "home" => Some(NamedKey::Home),
            "end" => Some(NamedKey::End),
            "pageup" => Some(NamedKey::PageUp),
            "pagedown" => Some(NamedKey::PageDown),
            "shift" | "shiftleft" => Some(NamedKey::ShiftLeft),
            "shiftright" => Some(NamedKey::ShiftRight),
            "control" | "controlleft" => Some(NamedKey::ControlLeft),
            "controlright" => Some(NamedKey::ControlRight),
            "alt" | "altleft" => Some(NamedKey::AltLeft),
            "altright" => Some(NamedKey::AltRight),
            "meta" | "metaleft" => Some(NamedKey::MetaLeft),
            "metaright" => Some(NamedKey::MetaRight),
            "capslock" => Some(NamedKey::CapsLock),
            other => parse_function_key(other).map(NamedKey::F),
        };
        if let Some(named) = named {
            return Self::Named(named);
        }
        // Keep the original spelling for single characters so "N" stays "N"
        let trimmed = name.trim();
        if trimmed.chars().count() == 1 {
            return Self::Character(trimmed.to_string());
        }
        Self::Unidentified
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{}", named.name()),
            Self::Character(s) => write!(f, "{}", s),
            Self::Unidentified => write!(f, "unidentified"),
        }
    }
}

fn parse_function_key(name: &str) -> Option<u8> {
    let digits = name.strip_prefix('f')?;
    let n: u8 = digits.parse().ok()?;
    (1..=24).contains(&n).then_some(n)
}

/// Canonicalize a key name to the internal standard form.
pub fn canonicalize_key(key: &str) -> String {
    let key_lower = key.trim().to_lowercase();
    match key_lower.as_str() {
        "arrowup" | "uparrow" => "up",
        "arrowdown" | "downarrow" => "down",
        "arrowleft" | "leftarrow" => "left",
        "arrowright" | "rightarrow" => "right",
        "return" => "enter",
        "esc" => "escape",
        "back" => "backspace",
        "del" => "delete",
        " " => "space",
        "pgup" => "pageup",
        "pgdn" | "pgdown" => "pagedown",
        "ctrl" | "ctl" => "control",
        "cmd" | "command" | "super" | "win" | "os" => "meta",
        "option" | "opt" => "alt",
        "caps" => "capslock",
        _ => return key_lower,
    }
    .to_string()
}

/// Phase of a key delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEventKind {
    Down,
    /// Auto-repeat while held; never redirected
    Repeat,
    Up,
}

/// A single keyboard event as seen by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub physical: PhysicalKey,
    pub logical: LogicalKey,
    /// Text produced by this key under the current layout, if any
    pub character: Option<String>,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn down(physical: PhysicalKey, logical: LogicalKey) -> Self {
        Self {
            kind: KeyEventKind::Down,
            physical,
            logical,
            character: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn up(physical: PhysicalKey, logical: LogicalKey) -> Self {
        Self {
            kind: KeyEventKind::Up,
            physical,
            logical,
            character: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn repeat(physical: PhysicalKey, logical: LogicalKey) -> Self {
        Self {
            kind: KeyEventKind::Repeat,
            physical,
            logical,
            character: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = Some(character.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_down(&self) -> bool {
        self.kind == KeyEventKind::Down
    }

    pub fn is_up(&self) -> bool {
        self.kind == KeyEventKind::Up
    }

    /// The produced text, treating an empty string the same as none.
    pub fn produced_text(&self) -> Option<&str> {
        self.character.as_deref().filter(|s| !s.is_empty())
    }
}

/// Outcome of offering a key event to a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEventResult {
    /// The event was consumed and must not propagate further
    Handled,
    /// The event continues through normal dispatch
    Ignored,
}

impl KeyEventResult {
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

impl From<bool> for KeyEventResult {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}
