use super::*;

#[test]
fn missing_selection_is_caret_at_end() {
    let value = TextEditingValue::new("héllo", None);
    assert_eq!(value.effective_selection(), TextSelection::caret(5));
}

#[test]
fn out_of_range_selection_is_clamped() {
    let value = TextEditingValue::new("abc", Some(TextSelection::new(1, 10)));
    assert_eq!(value.effective_selection(), TextSelection::new(1, 3));
}

#[test]
fn insert_into_empty_value_without_selection() {
    let mut value = TextEditingValue::default();
    value.insert_str("a");
    assert_eq!(value.text, "a");
    assert_eq!(value.caret(), Some(1));
}

#[test]
fn insert_replaces_reversed_selection() {
    let mut value = TextEditingValue::new("hello world", Some(TextSelection::new(11, 6)));
    value.insert_str("rust");
    assert_eq!(value.text, "hello rust");
    assert_eq!(value.caret(), Some(10));
}

#[test]
fn insert_handles_multibyte_text() {
    let mut value = TextEditingValue::new("日本", Some(TextSelection::caret(1)));
    value.insert_str("é");
    assert_eq!(value.text, "日é本");
    assert_eq!(value.caret(), Some(2));
}

#[test]
fn backspace_removes_character_before_caret() {
    let mut value = TextEditingValue::new("abc", Some(TextSelection::caret(2)));
    assert!(value.backspace());
    assert_eq!(value.text, "ac");
    assert_eq!(value.caret(), Some(1));
}

#[test]
fn backspace_removes_selection() {
    let mut value = TextEditingValue::new("abcdef", Some(TextSelection::new(1, 4)));
    assert!(value.backspace());
    assert_eq!(value.text, "aef");
    assert_eq!(value.caret(), Some(1));
}

#[test]
fn backspace_at_start_is_a_no_op() {
    let mut value = TextEditingValue::new("abc", Some(TextSelection::caret(0)));
    assert!(!value.backspace());
    assert_eq!(value.text, "abc");
    assert_eq!(value.caret(), Some(0));
}

#[test]
fn delete_forward_removes_character_after_caret() {
    let mut value = TextEditingValue::new("abc", Some(TextSelection::caret(1)));
    assert!(value.delete_forward());
    assert_eq!(value.text, "ac");
    assert_eq!(value.caret(), Some(1));
}

#[test]
fn delete_forward_at_end_is_a_no_op() {
    let mut value = TextEditingValue::with_text("abc");
    assert!(!value.delete_forward());
    assert_eq!(value.text, "abc");
    assert_eq!(value.caret(), Some(3));
}

#[test]
fn delete_forward_removes_selection() {
    let mut value = TextEditingValue::new("abcdef", Some(TextSelection::new(5, 2)));
    assert!(value.delete_forward());
    assert_eq!(value.text, "abf");
    assert_eq!(value.caret(), Some(2));
}

#[test]
fn focus_node_grants_focus_on_request() {
    let node = FocusNode::new();
    assert!(!node.has_focus());
    node.request_focus();
    assert!(node.has_focus());
    assert_eq!(node.focus_requests(), 1);
}

#[test]
fn controller_round_trips_value() {
    let controller = TextController::new();
    controller.set_value(TextEditingValue::with_text("hi"));
    assert_eq!(controller.text(), "hi");
    assert_eq!(controller.value().caret(), Some(2));
}
