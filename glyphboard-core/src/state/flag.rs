//! Display refresh flag
//!
//! Raised by button edge handlers, consumed by the main loop. Any number
//! of raises between two consumptions collapse into a single refresh.

use portable_atomic::{AtomicBool, Ordering};

/// Single-consumer "needs redraw" flag
pub struct DirtyFlag(AtomicBool);

impl Default for DirtyFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl DirtyFlag {
    /// Create a cleared flag
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Request a redraw
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Check without consuming
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Consume the flag, returning whether it was raised
    ///
    /// State written before a raise is visible once this returns `true`.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}
