//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Default shortcut bindings, in `Shortcut::parse` syntax
pub const DEFAULT_ESCAPE_SHORTCUT: &str = "escape";
pub const DEFAULT_NEW_WORKTREE_SHORTCUT: &str = "cmd+n";
pub const DEFAULT_NEW_CHAT_SHORTCUT: &str = "cmd+shift+n";

/// Route names containing this are treated as modal even when the route kind
/// is not a dialog/popup. Case-sensitive.
pub const DEFAULT_MODAL_NAME_HINT: &str = "dialog";

/// Per-key routing decisions are logged at trace level unless enabled
pub const DEFAULT_TRACE_KEY_EVENTS: bool = false;

/// Config file location (tilde-expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.keyfocus/config.json";
