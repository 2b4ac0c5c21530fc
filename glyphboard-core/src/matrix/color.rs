//! Color word encoding for the LED chain
//!
//! The chain expects green, red, blue from the most significant byte
//! down, with the low byte unused:
//!
//! ```text
//! 31      24 23      16 15       8 7        0
//! ┌─────────┬──────────┬──────────┬──────────┐
//! │  green  │   red    │   blue   │  0x00    │
//! └─────────┴──────────┴──────────┴──────────┘
//! ```

/// Global brightness scale applied to every channel
pub const BRIGHTNESS: f64 = 0.1;

/// Pack normalized RGB intensities into a chain color word
///
/// Each channel becomes `value * 255 * BRIGHTNESS` truncated toward
/// zero. Inputs are expected in `[0, 1]`. Nothing is clamped: values
/// outside that range follow Rust's saturating float-to-int cast, so
/// negatives and NaN give 0 and anything past 255 gives 255.
pub fn encode_color(r: f64, g: f64, b: f64) -> u32 {
    let r = quantize(r);
    let g = quantize(g);
    let b = quantize(b);

    ((g as u32) << 24) | ((r as u32) << 16) | ((b as u32) << 8)
}

fn quantize(value: f64) -> u8 {
    (value * 255.0 * BRIGHTNESS) as u8
}
