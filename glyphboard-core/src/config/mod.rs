//! Configuration types
//!
//! All configuration is compiled in: pin numbers, bus address, debounce
//! window and loop timing for the supported board layout.

pub mod board;

pub use board::*;
