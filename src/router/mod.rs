//! Global key routing and suspension.
//!
//! # Usage
//!
//! ```ignore
//! use keyfocus::router::GlobalKeyRouter;
//!
//! let router = GlobalKeyRouter::new();
//! router.attach(&hub);
//! router.connect_modal_tracker(&tracker);
//! router.register_target(focus_node.clone(), controller.clone());
//!
//! let resume = router.suspend();
//! // ... a surface that needs raw keys ...
//! resume.resume();
//! ```

#[allow(clippy::module_inception)]
mod router;
mod suspension;


pub use router::GlobalKeyRouter;
pub use suspension::ResumeHandle;
