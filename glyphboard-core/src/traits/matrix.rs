//! Pixel stream trait for the addressable LED matrix

/// Sequential sink of packed color words
///
/// Each call hands one word to the device, which shifts it out to the
/// next LED in the chain. Writes are synchronous: the call does not
/// return until the device has room for the word.
///
/// Must never be called from interrupt context.
pub trait PixelStream {
    /// Error type for write operations
    type Error;

    /// Write the next color word, blocking until the device accepts it
    fn write(&mut self, word: u32) -> Result<(), Self::Error>;
}

impl<T: PixelStream + ?Sized> PixelStream for &mut T {
    type Error = T::Error;

    fn write(&mut self, word: u32) -> Result<(), Self::Error> {
        (**self).write(word)
    }
}

