use super::*;
use crate::error::KeyFocusError;
use crate::shortcuts::{Shortcut, ShortcutAction, ShortcutParseError};
use std::fs;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.shortcuts.escape.as_deref(), Some(DEFAULT_ESCAPE_SHORTCUT));
    assert_eq!(
        config.shortcuts.new_worktree.as_deref(),
        Some(DEFAULT_NEW_WORKTREE_SHORTCUT)
    );
    assert_eq!(config.shortcuts.new_chat.as_deref(), Some(DEFAULT_NEW_CHAT_SHORTCUT));
    assert_eq!(config.modal.name_hint, DEFAULT_MODAL_NAME_HINT);
    assert!(!config.trace_key_events);
}

#[test]
fn test_default_bindings_in_table_order() {
    let bindings = Config::default().shortcut_bindings().unwrap();
    let actions: Vec<ShortcutAction> = bindings.iter().map(|b| b.action).collect();
    assert_eq!(
        actions,
        vec![
            ShortcutAction::Escape,
            ShortcutAction::NewWorktree,
            ShortcutAction::NewChat
        ]
    );
    assert_eq!(bindings[2].shortcut, Shortcut::parse("cmd+shift+n").unwrap());
}

#[test]
fn test_partial_json_fills_defaults() {
    let config: Config = serde_json::from_str(r#"{"shortcuts":{"newChat":"cmd+alt+n"}}"#).unwrap();
    assert_eq!(config.shortcuts.new_chat.as_deref(), Some("cmd+alt+n"));
    assert_eq!(config.shortcuts.escape.as_deref(), Some(DEFAULT_ESCAPE_SHORTCUT));
    assert_eq!(config.modal, ModalConfig::default());
}

#[test]
fn test_null_disables_shortcut() {
    let config: Config = serde_json::from_str(r#"{"shortcuts":{"escape":null}}"#).unwrap();
    let bindings = config.shortcut_bindings().unwrap();
    assert_eq!(bindings.len(), 2);
    assert!(bindings.iter().all(|b| b.action != ShortcutAction::Escape));
}

#[test]
fn test_invalid_shortcut_is_reported_with_action() {
    let mut config = Config::default();
    config.shortcuts.new_worktree = Some("cmd+".to_string());
    match config.shortcut_bindings() {
        Err(KeyFocusError::InvalidShortcut {
            action, source, ..
        }) => {
            assert_eq!(action, "new_worktree");
            assert_eq!(source, ShortcutParseError::MissingKey);
        }
        other => panic!("expected InvalidShortcut, got {:?}", other),
    }
}

#[test]
fn test_config_serialization_uses_camel_case() {
    let config = Config {
        trace_key_events: true,
        ..Config::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"traceKeyEvents\":true"));
    assert!(json.contains("\"newWorktree\""));
    assert!(json.contains("\"nameHint\""));
    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"modal":{"nameHint":"sheet"},"traceKeyEvents":true}"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.modal.name_hint, "sheet");
    assert!(config.trace_key_events);
}

#[test]
fn test_load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_config_from(&path),
        Err(KeyFocusError::ConfigParse(_))
    ));
}

#[test]
fn test_load_rejects_bad_binding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"shortcuts":{"escape":"hyper+q"}}"#).unwrap();
    assert!(matches!(
        load_config_from(&path),
        Err(KeyFocusError::InvalidShortcut { .. })
    ));
}

#[test]
fn test_default_config_path_is_expanded() {
    let path = default_config_path();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with(".keyfocus/config.json"));
}
