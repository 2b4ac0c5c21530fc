//! Board-agnostic core logic for the Glyphboard demo firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Device capability traits (pixel stream, frame buffer)
//! - Color encoding and the 5x5 digit glyph table
//! - LED matrix rendering
//! - Button debounce and the interrupt/main-loop shared state
//! - Status screen composition
//! - One iteration of the main event loop
//! - Compiled-in board configuration

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod display;
pub mod matrix;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
