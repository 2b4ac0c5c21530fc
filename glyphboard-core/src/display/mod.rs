//! Status screen
//!
//! The 128x64 display mirrors the last typed character and both LED
//! states. Every refresh redraws the full screen from scratch.

pub mod compositor;

pub use compositor::{refresh, status_text, Layout};
