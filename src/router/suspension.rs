//! Reentrant suspension counter and its one-shot resume capability.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::debug;

/// Shared depth counter. Interception is active iff the depth is zero.
#[derive(Clone, Debug, Default)]
pub(crate) struct SuspendCounter {
    depth: Rc<Cell<usize>>,
}

impl SuspendCounter {
    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }

    pub(crate) fn acquire(&self) -> ResumeHandle {
        let depth = self.depth.get() + 1;
        self.depth.set(depth);
        ResumeHandle {
            depth: Rc::downgrade(&self.depth),
            resumed: Cell::new(false),
        }
    }
}

/// Capability returned by `GlobalKeyRouter::suspend`.
///
/// The first `resume()` undoes exactly one suspension; later calls do
/// nothing. Dropping the handle does NOT resume.
#[derive(Debug)]
#[must_use = "interception stays suspended until resume() is called"]
pub struct ResumeHandle {
    depth: Weak<Cell<usize>>,
    resumed: Cell<bool>,
}

impl ResumeHandle {
    /// Release this suspension. Returns `true` only for the call that
    /// actually decremented the counter.
    pub fn resume(&self) -> bool {
        if self.resumed.replace(true) {
            return false;
        }
        // Router already gone: nothing left to resume
        let Some(depth) = self.depth.upgrade() else {
            return false;
        };
        let remaining = depth.get().saturating_sub(1);
        depth.set(remaining);
        debug!(suspend_count = remaining, "key interception resumed");
        true
    }

    pub fn is_resumed(&self) -> bool {
        self.resumed.get()
    }
}
