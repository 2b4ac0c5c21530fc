//! RP2040-specific HAL for the Glyphboard firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `glyphboard-hal` and `glyphboard-core` device traits:
//!
//! - Push-pull LED outputs ([`gpio::LedPin`])
//! - Non-blocking console receive over a buffered UART ([`serial::UartConsole`])
//! - PIO-based WS2812 pixel stream ([`ws2812::PioWs2812`])

#![no_std]

pub mod gpio;
pub mod serial;
pub mod ws2812;

pub use gpio::LedPin;
pub use serial::UartConsole;
pub use ws2812::PioWs2812;
