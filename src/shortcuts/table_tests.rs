use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::keys::{KeyEvent, LogicalKey, Modifiers, NamedKey, PhysicalKey};

fn key_down(name: &str, modifiers: Modifiers) -> KeyEvent {
    KeyEvent::down(PhysicalKey(0x11), LogicalKey::from_name(name)).with_modifiers(modifiers)
}

fn counting(table: &mut ShortcutTable, action: ShortcutAction) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let hits = count.clone();
    table.set_callback(action, Rc::new(move || hits.set(hits.get() + 1)));
    count
}

#[test]
fn parse_accepts_aliases_and_lowercases_key() {
    let shortcut = Shortcut::parse("Cmd+Shift+N").unwrap();
    assert_eq!(shortcut.key, LogicalKey::character("n"));
    assert_eq!(shortcut.modifiers, ShortcutModifiers::command_shift());

    let ctrl = Shortcut::parse("ctrl + n").unwrap();
    assert_eq!(ctrl.modifiers, ShortcutModifiers::command());

    let esc = Shortcut::parse("esc").unwrap();
    assert_eq!(esc, Shortcut::from(NamedKey::Escape));
}

#[test]
fn parse_reports_errors() {
    assert_eq!(Shortcut::parse("  "), Err(ShortcutParseError::Empty));
    assert_eq!(Shortcut::parse("cmd+shift"), Err(ShortcutParseError::MissingKey));
    assert_eq!(
        Shortcut::parse("cmd+a+b"),
        Err(ShortcutParseError::UnknownToken("b".to_string()))
    );
    assert_eq!(
        Shortcut::parse("cmd+wat"),
        Err(ShortcutParseError::UnknownKey("wat".to_string()))
    );
}

#[test]
fn canonical_string_round_trips() {
    let shortcut = Shortcut::parse("shift+meta+n").unwrap();
    assert_eq!(shortcut.to_canonical_string(), "cmd+shift+n");
    assert_eq!(Shortcut::parse(&shortcut.to_string()).unwrap(), shortcut);
}

#[test]
fn meta_and_control_both_satisfy_command() {
    let shortcut = Shortcut::parse("cmd+n").unwrap();
    assert!(shortcut.matches(&key_down("n", Modifiers::meta())));
    assert!(shortcut.matches(&key_down("n", Modifiers::ctrl())));
    let both = Modifiers {
        meta: true,
        ctrl: true,
        ..Default::default()
    };
    assert!(shortcut.matches(&key_down("N", both)));
    assert!(!shortcut.matches(&key_down("n", Modifiers::default())));
}

#[test]
fn unlisted_modifiers_must_be_absent() {
    let escape = Shortcut::from(NamedKey::Escape);
    assert!(escape.matches(&key_down("escape", Modifiers::default())));
    assert!(!escape.matches(&key_down("escape", Modifiers::shift())));

    let new_worktree = Shortcut::parse("cmd+n").unwrap();
    assert!(!new_worktree.matches(&key_down("n", Modifiers::meta().with_shift())));
}

#[test]
fn default_table_routes_n_by_shift_state() {
    let mut table = ShortcutTable::default();
    let worktree = counting(&mut table, ShortcutAction::NewWorktree);
    let chat = counting(&mut table, ShortcutAction::NewChat);

    let hit = table.find_match(&key_down("n", Modifiers::meta())).unwrap();
    assert_eq!(hit.action, ShortcutAction::NewWorktree);
    (hit.callback.unwrap())();

    let hit = table
        .find_match(&key_down("N", Modifiers::ctrl().with_shift()))
        .unwrap();
    assert_eq!(hit.action, ShortcutAction::NewChat);
    (hit.callback.unwrap())();

    assert_eq!(worktree.get(), 1);
    assert_eq!(chat.get(), 1);
}

#[test]
fn match_without_callback_reports_no_callback() {
    let table = ShortcutTable::default();
    let hit = table
        .find_match(&key_down("escape", Modifiers::default()))
        .unwrap();
    assert_eq!(hit.action, ShortcutAction::Escape);
    assert!(hit.callback.is_none());
}

#[test]
fn only_key_down_events_match() {
    let mut table = ShortcutTable::default();
    let _ = counting(&mut table, ShortcutAction::Escape);
    let up = KeyEvent::up(PhysicalKey(1), LogicalKey::Named(NamedKey::Escape));
    let repeat = KeyEvent::repeat(PhysicalKey(1), LogicalKey::Named(NamedKey::Escape));
    assert!(table.find_match(&up).is_none());
    assert!(table.find_match(&repeat).is_none());
}

#[test]
fn clear_callback_reports_presence() {
    let mut table = ShortcutTable::default();
    let _ = counting(&mut table, ShortcutAction::Escape);
    assert!(table.has_callback(ShortcutAction::Escape));
    assert!(table.clear_callback(ShortcutAction::Escape));
    assert!(!table.clear_callback(ShortcutAction::Escape));
}
