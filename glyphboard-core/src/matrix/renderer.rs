//! Glyph to pixel-stream rendering

use super::color::encode_color;
use super::glyph::{mirror_index, Digit, NUM_PIXELS};
use crate::traits::PixelStream;

/// Color words for a digit, in chain order
///
/// Position `i` carries the glyph bit at [`mirror_index`]`(i)` as a gray
/// level (r = g = b = bit). Pure: the same digit always yields the same
/// frame.
pub fn digit_frame(digit: Digit) -> [u32; NUM_PIXELS] {
    let glyph = digit.glyph();
    core::array::from_fn(|i| {
        let level = f64::from(glyph.bit(mirror_index(i)));
        encode_color(level, level, level)
    })
}

/// Show a digit on the matrix
///
/// Writes exactly [`NUM_PIXELS`] words, first LED first. Each write
/// blocks until the stream accepts it.
pub fn render_digit<P: PixelStream>(stream: &mut P, digit: Digit) -> Result<(), P::Error> {
    for word in digit_frame(digit) {
        stream.write(word)?;
    }
    Ok(())
}

/// Turn every LED off
pub fn clear_matrix<P: PixelStream>(stream: &mut P) -> Result<(), P::Error> {
    let off = encode_color(0.0, 0.0, 0.0);
    for _ in 0..NUM_PIXELS {
        stream.write(off)?;
    }
    Ok(())
}
