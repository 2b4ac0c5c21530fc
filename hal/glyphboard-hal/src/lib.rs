//! Glyphboard Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the board
//! logic needs from a chip-specific HAL. Keeping them as traits lets the
//! core crate run its event loop and button handling against host fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (glyphboard-firmware)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glyphboard-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ glyphboard-   │
//!             │ hal-rp2040    │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (status LEDs)
//! - [`serial::SerialRx`] - Zero-wait polling of the serial console

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use serial::SerialRx;
