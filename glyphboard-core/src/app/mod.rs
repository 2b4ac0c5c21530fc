//! Main event loop
//!
//! One iteration of the firmware's polling loop, minus the idle sleep.
//! The firmware calls [`EventLoop::step`] and then sleeps for the
//! configured interval.

pub mod event_loop;

pub use event_loop::{EventLoop, LoopError, StepReport, BLANK};
