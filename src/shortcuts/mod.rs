//! Global shortcut dispatch.
//!
//! This module provides:
//! - `Shortcut` - A key plus an exact modifier pattern, parsed from `"cmd+shift+n"`
//! - `ShortcutTable` - Ordered bindings with per-action callbacks
//!
//! # Example
//!
//! ```ignore
//! use keyfocus::shortcuts::{Shortcut, ShortcutAction, ShortcutBinding, ShortcutTable};
//!
//! let mut table = ShortcutTable::default();
//! table.set_bindings(vec![ShortcutBinding {
//!     action: ShortcutAction::NewChat,
//!     shortcut: Shortcut::parse("cmd+shift+n")?,
//! }]);
//! ```

mod table;
mod types;

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;

pub use table::{ShortcutAction, ShortcutBinding, ShortcutCallback, ShortcutMatch, ShortcutTable};
pub use types::{Shortcut, ShortcutModifiers, ShortcutParseError};
