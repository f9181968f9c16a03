use thiserror::Error;
use tracing::{error, warn};

use crate::shortcuts::ShortcutParseError;

/// Errors surfaced while setting the router up. Key routing itself never fails.
#[derive(Error, Debug)]
pub enum KeyFocusError {
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid shortcut '{shortcut}' for {action}: {source}")]
    InvalidShortcut {
        action: &'static str,
        shortcut: String,
        #[source]
        source: ShortcutParseError,
    },
}

impl KeyFocusError {
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigRead { path, .. } => format!("Could not read config from {}", path),
            Self::ConfigParse(e) => format!("Invalid config format: {}", e),
            Self::InvalidShortcut {
                action, shortcut, ..
            } => format!("Shortcut '{}' for {} is not valid", shortcut, action),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeyFocusError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use keyfocus::error::ResultExt;
///
/// // Fall back to the default table if the bindings are bad
/// let bindings = config.shortcut_bindings().warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shortcut_messages() {
        let err = KeyFocusError::InvalidShortcut {
            action: "new_chat",
            shortcut: "cmd+".to_string(),
            source: ShortcutParseError::MissingKey,
        };
        assert_eq!(
            err.to_string(),
            "Invalid shortcut 'cmd+' for new_chat: shortcut has no key, only modifiers"
        );
        assert_eq!(err.user_message(), "Shortcut 'cmd+' for new_chat is not valid");
    }

    #[test]
    fn test_config_parse_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: KeyFocusError = parse_err.into();
        assert!(matches!(err, KeyFocusError::ConfigParse(_)));
    }

    #[test]
    fn test_result_ext_maps_to_option() {
        let ok: std::result::Result<u8, String> = Ok(3);
        assert_eq!(ok.log_err(), Some(3));
        let err: std::result::Result<u8, String> = Err("boom".to_string());
        assert_eq!(err.warn_on_err(), None);
    }
}
