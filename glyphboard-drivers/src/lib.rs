//! Hardware driver implementations
//!
//! Concrete drivers that implement the device traits from
//! `glyphboard-core`. Drivers are generic over `embedded-hal` buses so
//! they run on any chip and on the host under test.
//!
//! # Drivers
//!
//! - [`display::Ssd1306`] - 128x64 monochrome OLED over I2C, implementing
//!   [`glyphboard_core::traits::FrameBuffer`]

#![no_std]

pub mod display;
