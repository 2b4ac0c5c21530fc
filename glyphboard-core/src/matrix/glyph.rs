//! Digit bitmaps for the 5x5 matrix
//!
//! Bitmaps are stored row-major as they read on paper. The LED chain is
//! wired so that each row runs right to left, hence [`mirror_index`].

/// LEDs in the matrix
pub const NUM_PIXELS: usize = 25;

/// LEDs per matrix row
pub const ROW_LEN: usize = 5;

/// A 5x5 binary bitmap, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph([u8; NUM_PIXELS]);

impl Glyph {
    /// Create a glyph from 25 row-major bits (0 or 1)
    pub const fn new(bits: [u8; NUM_PIXELS]) -> Self {
        Self(bits)
    }

    /// Bit at a row-major index
    pub const fn bit(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Whether the LED at a row-major index is lit
    pub const fn is_lit(&self, index: usize) -> bool {
        self.0[index] != 0
    }
}

/// A decimal digit, 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its value, `None` if above 9
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse an ASCII '0'..='9' byte
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }

    /// Numeric value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bitmap for this digit
    pub fn glyph(self) -> &'static Glyph {
        &GLYPHS[self.0 as usize]
    }
}

/// Map a chain position to the bitmap index it displays
///
/// Flips each row horizontally: `(i / 5) * 5 + (4 - i % 5)`.
pub const fn mirror_index(i: usize) -> usize {
    (i / ROW_LEN) * ROW_LEN + (ROW_LEN - 1 - i % ROW_LEN)
}

/// Bitmaps for digits 0-9
#[rustfmt::skip]
pub static GLYPHS: [Glyph; 10] = [
    // 0
    Glyph::new([0,1,1,1,0, 1,0,0,0,1, 1,0,0,0,1, 1,0,0,0,1, 0,1,1,1,0]),
    // 1
    Glyph::new([0,1,1,1,0, 0,0,1,0,0, 0,0,1,0,0, 0,0,1,1,0, 0,0,1,0,0]),
    // 2
    Glyph::new([1,1,1,1,1, 0,0,0,0,1, 0,1,1,1,0, 1,0,0,0,0, 1,1,1,1,1]),
    // 3
    Glyph::new([1,1,1,1,1, 1,0,0,0,0, 0,1,1,1,0, 1,0,0,0,0, 1,1,1,1,1]),
    // 4
    Glyph::new([0,0,0,0,1, 1,0,0,0,0, 1,1,1,1,1, 1,0,0,0,1, 1,0,0,0,1]),
    // 5
    Glyph::new([1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1]),
    // 6
    Glyph::new([1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1]),
    // 7
    Glyph::new([1,0,0,0,0, 0,0,0,1,0, 0,0,1,0,0, 0,1,0,0,0, 1,1,1,1,1]),
    // 8
    Glyph::new([1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1]),
    // 9
    Glyph::new([1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_index_flips_rows() {
        assert_eq!(mirror_index(0), 4);
        assert_eq!(mirror_index(4), 0);
        assert_eq!(mirror_index(2), 2);
        assert_eq!(mirror_index(5), 9);
        assert_eq!(mirror_index(24), 20);
    }

    #[test]
    fn test_mirror_index_is_involution() {
        for i in 0..NUM_PIXELS {
            let m = mirror_index(i);
            assert!(m < NUM_PIXELS);
            assert_eq!(m / ROW_LEN, i / ROW_LEN);
            assert_eq!(mirror_index(m), i);
        }
    }

    #[test]
    fn test_digit_from_ascii() {
        assert_eq!(Digit::from_ascii(b'0').map(Digit::value), Some(0));
        assert_eq!(Digit::from_ascii(b'7').map(Digit::value), Some(7));
        assert_eq!(Digit::from_ascii(b'9').map(Digit::value), Some(9));
        assert_eq!(Digit::from_ascii(b'A'), None);
        assert_eq!(Digit::from_ascii(b'/'), None);
        assert_eq!(Digit::from_ascii(b':'), None);
    }

    #[test]
    fn test_digit_range() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_glyphs_are_binary() {
        for glyph in GLYPHS.iter() {
            for i in 0..NUM_PIXELS {
                assert!(glyph.bit(i) <= 1);
            }
        }
    }

    #[test]
    fn test_eight_shape() {
        let eight = Digit::new(8).unwrap().glyph();
        for i in 0..ROW_LEN {
            assert!(eight.is_lit(i));
        }
        assert!(!eight.is_lit(6));
    }
}
