//! Embassy async tasks
//!
//! Button tasks stand in for the edge interrupt handlers: each wakes on a
//! GPIO falling edge, updates the shared state and returns to waiting.
//! They are spawned on an interrupt executor, so they preempt the main
//! loop even while it is blocked in a device write.

pub mod button;

pub use button::button_task;
