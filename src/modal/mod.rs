//! Modal route tracking.
//!
//! The host's navigator reports route changes here; the tracker keeps a count
//! of open dialogs, popups and bottom sheets and emits `Opened`/`Closed`
//! transitions that the key router uses to suspend itself.

mod route;
mod tracker;

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tracker_tests;

pub use route::{RouteDescriptor, RouteKind};
pub use tracker::{ModalTransition, RouteModalTracker, SubscriptionId};
