//! Frame buffer trait for the monochrome status display

/// Monochrome frame buffer device
///
/// Drawing calls only touch the in-memory buffer; nothing reaches the
/// panel until [`FrameBuffer::flush`]. Coordinates are in pixels with the
/// origin at the top-left corner of the canvas.
pub trait FrameBuffer {
    /// Error type for device operations
    type Error;

    /// Canvas width in pixels
    const WIDTH: u8;

    /// Canvas height in pixels
    const HEIGHT: u8;

    /// Clear the whole buffer to background
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw a rectangle with its top-left corner at (`x`, `y`)
    ///
    /// Outline only unless `filled` is set.
    fn draw_rect(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        filled: bool,
    ) -> Result<(), Self::Error>;

    /// Draw text with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), Self::Error>;

    /// Send the buffer to the physical display
    fn flush(&mut self) -> Result<(), Self::Error>;
}
