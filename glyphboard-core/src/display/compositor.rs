//! Status screen composition

use heapless::String;

use crate::state::LedStatus;
use crate::traits::FrameBuffer;

/// Fixed positions on the 128x64 canvas
pub struct Layout;

impl Layout {
    /// Border rectangle: (x, y, width, height)
    pub const BORDER: (u8, u8, u8, u8) = (3, 3, 122, 58);
    /// Last typed character
    pub const CHAR: (u8, u8) = (10, 10);
    /// Green LED label and value
    pub const GREEN_LABEL: (u8, u8) = (10, 30);
    pub const GREEN_VALUE: (u8, u8) = (80, 30);
    /// Blue LED label and value
    pub const BLUE_LABEL: (u8, u8) = (10, 45);
    pub const BLUE_VALUE: (u8, u8) = (80, 45);
}

/// Green LED label, as drawn
pub const GREEN_LABEL: &str = "LED Verde:";

/// Blue LED label, padded to line up with the green one
pub const BLUE_LABEL: &str = "LED Azul :";

/// On/off text, padded to three columns so "ON" fully overwrites "OFF"
pub const fn status_text(on: bool) -> &'static str {
    if on {
        "ON "
    } else {
        "OFF"
    }
}

/// Redraw the whole status screen and push it to the panel
///
/// Clear, border, character, both LED lines, flush. Stops at the first
/// device error.
pub fn refresh<F: FrameBuffer>(
    display: &mut F,
    last_char: char,
    leds: LedStatus,
) -> Result<(), F::Error> {
    display.clear()?;

    let (x, y, w, h) = Layout::BORDER;
    display.draw_rect(x, y, w, h, false)?;

    let mut text: String<4> = String::new();
    let _ = text.push(last_char);
    let (x, y) = Layout::CHAR;
    display.draw_text(&text, x, y)?;

    let (x, y) = Layout::GREEN_LABEL;
    display.draw_text(GREEN_LABEL, x, y)?;
    let (x, y) = Layout::GREEN_VALUE;
    display.draw_text(status_text(leds.green), x, y)?;

    let (x, y) = Layout::BLUE_LABEL;
    display.draw_text(BLUE_LABEL, x, y)?;
    let (x, y) = Layout::BLUE_VALUE;
    display.draw_text(status_text(leds.blue), x, y)?;

    display.flush()
}
