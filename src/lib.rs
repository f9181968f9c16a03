//! keyfocus - global key routing for a desktop chat client
//!
//! Redirects typing into the chat composer when it is not focused, dispatches
//! a few global shortcuts, and steps aside while dialogs or other modal
//! routes are open or while any caller holds a suspension.

pub mod config;
pub mod error;
pub mod host;
pub mod keys;
pub mod logging;
pub mod modal;
pub mod router;
pub mod shortcuts;
pub mod text;

// Toolkit bridge
#[cfg(feature = "gpui")]
pub mod gpui_bridge;

pub use keys::{KeyEvent, KeyEventResult};
pub use modal::RouteModalTracker;
pub use router::{GlobalKeyRouter, ResumeHandle};
