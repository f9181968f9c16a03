//! Typing-surface model: the text value the router edits and the focus/text
//! interfaces a hosting widget implements.

mod editing;
mod target;

#[cfg(test)]
#[path = "editing_tests.rs"]
mod editing_tests;

pub use editing::{TextEditingValue, TextSelection};
pub use target::{FocusHandle, FocusNode, TextBuffer, TextController};
