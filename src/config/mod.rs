//! Configuration module - shortcut bindings and routing options
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.keyfocus/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, ShortcutConfig, ModalConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_ESCAPE_SHORTCUT, DEFAULT_MODAL_NAME_HINT,
    DEFAULT_NEW_CHAT_SHORTCUT, DEFAULT_NEW_WORKTREE_SHORTCUT,
};

pub use types::{Config, ModalConfig, ShortcutConfig};

pub use loader::{default_config_path, load_config, load_config_from};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
