//! State shared between button edge handlers and the main loop
//!
//! Edge handlers run to completion and may preempt the main loop at any
//! point. No lock is taken in either direction:
//!
//! - each [`ButtonChannel`] has exactly one writer (its edge handler)
//! - the [`DirtyFlag`] has one consumer (the main loop)
//! - the main loop tolerates stale reads; a late raise is picked up on
//!   the next iteration
//!
//! Handlers always publish the new LED state before raising the flag, so
//! a refresh triggered by the flag never shows an older state.

pub mod button;
pub mod flag;

pub use button::{debounce, ButtonChannel, ButtonId, EdgeOutcome, DEBOUNCE_WINDOW_US};
pub use flag::DirtyFlag;

use glyphboard_hal::OutputPin;

/// Snapshot of both LED states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedStatus {
    pub green: bool,
    pub blue: bool,
}

/// Process-wide button and refresh state
///
/// `const`-constructible so it can live in a `static`.
pub struct SharedState {
    green: ButtonChannel,
    blue: ButtonChannel,
    dirty: DirtyFlag,
    debounce_window_us: u32,
}

impl SharedState {
    /// Power-on state: both LEDs off, flag clear
    pub const fn new(debounce_window_us: u32) -> Self {
        Self {
            green: ButtonChannel::new(ButtonId::A),
            blue: ButtonChannel::new(ButtonId::B),
            dirty: DirtyFlag::new(),
            debounce_window_us,
        }
    }

    /// Channel for a button
    pub fn channel(&self, id: ButtonId) -> &ButtonChannel {
        match id {
            ButtonId::A => &self.green,
            ButtonId::B => &self.blue,
        }
    }

    /// Edge handler entry point
    ///
    /// Debounces, toggles, drives `led` and raises the refresh flag on
    /// acceptance. Never blocks.
    pub fn on_falling_edge<P: OutputPin>(
        &self,
        id: ButtonId,
        now_us: u32,
        led: &mut P,
    ) -> EdgeOutcome {
        let outcome = self
            .channel(id)
            .on_falling_edge(now_us, self.debounce_window_us, led);
        if outcome.is_accepted() {
            self.dirty.raise();
        }
        outcome
    }

    /// Current LED states
    pub fn leds(&self) -> LedStatus {
        LedStatus {
            green: self.green.is_on(),
            blue: self.blue.is_on(),
        }
    }

    /// Consume a pending refresh request
    pub fn take_dirty(&self) -> bool {
        self.dirty.take()
    }

    /// Peek at the refresh flag without consuming it
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_raised()
    }
}
