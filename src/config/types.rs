//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::error::{KeyFocusError, Result};
use crate::shortcuts::{Shortcut, ShortcutAction, ShortcutBinding};

// ============================================
// SHORTCUTS
// ============================================

/// Global shortcut bindings. `None` (JSON `null`) disables a shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutConfig {
    #[serde(default = "default_escape")]
    pub escape: Option<String>,
    #[serde(default = "default_new_worktree")]
    pub new_worktree: Option<String>,
    #[serde(default = "default_new_chat")]
    pub new_chat: Option<String>,
}

fn default_escape() -> Option<String> {
    Some(DEFAULT_ESCAPE_SHORTCUT.to_string())
}
fn default_new_worktree() -> Option<String> {
    Some(DEFAULT_NEW_WORKTREE_SHORTCUT.to_string())
}
fn default_new_chat() -> Option<String> {
    Some(DEFAULT_NEW_CHAT_SHORTCUT.to_string())
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        ShortcutConfig {
            escape: default_escape(),
            new_worktree: default_new_worktree(),
            new_chat: default_new_chat(),
        }
    }
}

impl ShortcutConfig {
    /// Parse the bindings in table order (escape, new worktree, new chat).
    pub fn bindings(&self) -> Result<Vec<ShortcutBinding>> {
        let entries = [
            (ShortcutAction::Escape, &self.escape),
            (ShortcutAction::NewWorktree, &self.new_worktree),
            (ShortcutAction::NewChat, &self.new_chat),
        ];
        let mut bindings = Vec::with_capacity(entries.len());
        for (action, value) in entries {
            let Some(value) = value else {
                continue;
            };
            let shortcut =
                Shortcut::parse(value).map_err(|source| KeyFocusError::InvalidShortcut {
                    action: action.name(),
                    shortcut: value.clone(),
                    source,
                })?;
            bindings.push(ShortcutBinding { action, shortcut });
        }
        Ok(bindings)
    }
}

// ============================================
// MODAL TRACKING
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalConfig {
    /// Substring that marks a route name as modal (empty disables)
    #[serde(default = "default_name_hint")]
    pub name_hint: String,
}

fn default_name_hint() -> String {
    DEFAULT_MODAL_NAME_HINT.to_string()
}

impl Default for ModalConfig {
    fn default() -> Self {
        ModalConfig {
            name_hint: default_name_hint(),
        }
    }
}

// ============================================
// ROOT CONFIG
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub shortcuts: ShortcutConfig,
    #[serde(default)]
    pub modal: ModalConfig,
    /// Log every routing decision at debug level instead of trace
    #[serde(default = "default_trace_key_events")]
    pub trace_key_events: bool,
}

fn default_trace_key_events() -> bool {
    DEFAULT_TRACE_KEY_EVENTS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            shortcuts: ShortcutConfig::default(),
            modal: ModalConfig::default(),
            trace_key_events: DEFAULT_TRACE_KEY_EVENTS,
        }
    }
}

impl Config {
    pub fn shortcut_bindings(&self) -> Result<Vec<ShortcutBinding>> {
        self.shortcuts.bindings()
    }
}
