//! 5x5 addressable LED matrix
//!
//! Digits 0-9 are drawn from a fixed bitmap table and streamed to the
//! matrix one packed color word per LED, in chain order.

pub mod color;
pub mod glyph;
pub mod renderer;

pub use color::{encode_color, BRIGHTNESS};
pub use glyph::{mirror_index, Digit, Glyph, GLYPHS, NUM_PIXELS};
pub use renderer::{clear_matrix, digit_frame, render_digit};
