//! Shortcut chords and their string form (`"cmd+shift+n"`).

use std::fmt;
use thiserror::Error;

use crate::keys::{canonicalize_key, KeyEvent, LogicalKey, NamedKey};

/// Errors that can occur when parsing a shortcut string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("shortcut string is empty")]
    Empty,
    #[error("shortcut has no key, only modifiers")]
    MissingKey,
    #[error("unknown token '{0}' in shortcut")]
    UnknownToken(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Modifier pattern a shortcut requires. Every flag must match exactly.
///
/// `command` is satisfied by Meta or Control (or both), so `cmd+n` fires for
/// ⌘N on macOS and Ctrl+N elsewhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShortcutModifiers {
    pub command: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ShortcutModifiers {
    pub fn command() -> Self {
        Self {
            command: true,
            ..Default::default()
        }
    }

    pub fn command_shift() -> Self {
        Self {
            command: true,
            shift: true,
            ..Default::default()
        }
    }
}

/// A keyboard shortcut consisting of a modifier pattern and a main key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: LogicalKey,
    pub modifiers: ShortcutModifiers,
}

impl Shortcut {
    pub fn new(key: LogicalKey, modifiers: ShortcutModifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn parse(s: &str) -> Result<Self, ShortcutParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let normalized = s.replace('+', " ");
        let parts: Vec<&str> = normalized.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut modifiers = ShortcutModifiers::default();
        let mut key_part: Option<&str> = None;

        for part in &parts {
            match canonicalize_key(part).as_str() {
                "meta" | "control" | "mod" | "⌘" | "^" => modifiers.command = true,
                "alt" | "⌥" => modifiers.alt = true,
                "shift" | "shft" | "⇧" => modifiers.shift = true,
                _ => {
                    if key_part.is_some() {
                        return Err(ShortcutParseError::UnknownToken(part.to_string()));
                    }
                    key_part = Some(part);
                }
            }
        }

        let key_name = key_part.ok_or(ShortcutParseError::MissingKey)?;
        let key = match LogicalKey::from_name(key_name) {
            LogicalKey::Unidentified => {
                return Err(ShortcutParseError::UnknownKey(key_name.to_string()))
            }
            LogicalKey::Character(c) => LogicalKey::Character(c.to_lowercase()),
            named => named,
        };

        Ok(Self { key, modifiers })
    }

    /// Whether a key-down event triggers this shortcut.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let mods = event.modifiers;
        if mods.command() != self.modifiers.command
            || mods.alt != self.modifiers.alt
            || mods.shift != self.modifiers.shift
        {
            return false;
        }
        match &self.key {
            LogicalKey::Character(c) => event.logical.matches_char(c),
            other => *other == event.logical,
        }
    }

    pub fn to_canonical_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.alt {
            parts.push("alt".to_string());
        }
        if self.modifiers.command {
            parts.push("cmd".to_string());
        }
        if self.modifiers.shift {
            parts.push("shift".to_string());
        }
        parts.push(self.key.to_string());
        parts.join("+")
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<NamedKey> for Shortcut {
    fn from(named: NamedKey) -> Self {
        Self::new(LogicalKey::Named(named), ShortcutModifiers::default())
    }
}
