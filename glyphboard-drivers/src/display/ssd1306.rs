//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Keeps a local frame buffer that `embedded-graphics` draws into;
//! nothing is sent to the panel until [`FrameBuffer::flush`].

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use glyphboard_core::traits::FrameBuffer;

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Power-on command sequence (horizontal addressing, 128x64 panel)
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_MEMORY_MODE,
    0x00, // Horizontal addressing
    cmd::SET_START_LINE,
    cmd::SET_SEG_REMAP,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x30,
    cmd::SET_CONTRAST,
    0xFF,
    cmd::RESUME_RAM,
    cmd::SET_NORMAL,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::DISPLAY_ON,
];

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ssd1306Error<E> {
    /// Bus transfer failed
    I2c(E),
    /// Flush attempted before `init`
    NotInitialized,
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialized: false,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        self.initialized = true;
        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(Ssd1306Error::I2c)
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Ssd1306<I2C> {
    /// Zero the frame buffer
    pub fn clear_buffer(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    /// Set or clear one pixel; out-of-bounds points are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let mask = 1u8 << (y % 8);
        let byte = &mut self.buffer[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read back one pixel from the frame buffer
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl<I2C: I2c> FrameBuffer for Ssd1306<I2C> {
    type Error = Ssd1306Error<I2C::Error>;

    const WIDTH: u8 = WIDTH as u8;
    const HEIGHT: u8 = HEIGHT as u8;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clear_buffer();
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        filled: bool,
    ) -> Result<(), Self::Error> {
        let style = if filled {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };
        let _ = Rectangle::new(
            Point::new(i32::from(x), i32::from(y)),
            Size::new(u32::from(width), u32::from(height)),
        )
        .into_styled(style)
        .draw(self);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let _ = Text::with_baseline(
            text,
            Point::new(i32::from(x), i32::from(y)),
            style,
            Baseline::Top,
        )
        .draw(self);
        Ok(())
    }

    /// Flush the frame buffer to the display
    fn flush(&mut self) -> Result<(), Self::Error> {
        if !self.initialized {
            return Err(Ssd1306Error::NotInitialized);
        }

        // Full-screen address window; the data then streams page by page
        self.command(cmd::SET_COLUMN_ADDR)?;
        self.command(0)?;
        self.command((WIDTH - 1) as u8)?;
        self.command(cmd::SET_PAGE_ADDR)?;
        self.command(0)?;
        self.command((PAGES - 1) as u8)?;

        for page in 0..PAGES {
            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c
                .write(self.address, &data)
                .map_err(Ssd1306Error::I2c)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    /// I2C bus that records every write transaction
    #[derive(Default)]
    struct RecordingI2c {
        writes: Vec<(u8, Vec<u8, 130>), 48>,
        fail: bool,
    }

    impl RecordingI2c {
        fn commands(&self) -> impl Iterator<Item = u8> + '_ {
            self.writes
                .iter()
                .filter(|(_, bytes)| bytes[0] == CONTROL_COMMAND)
                .map(|(_, bytes)| bytes[1])
        }

        fn data_pages(&self) -> impl Iterator<Item = &[u8]> + '_ {
            self.writes
                .iter()
                .filter(|(_, bytes)| bytes[0] == CONTROL_DATA)
                .map(|(_, bytes)| &bytes[1..])
        }
    }

    impl ErrorType for RecordingI2c {
        type Error = ErrorKind;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    let mut owned = Vec::new();
                    owned.extend_from_slice(bytes).map_err(|_| ErrorKind::Overrun)?;
                    self.writes
                        .push((address, owned))
                        .map_err(|_| ErrorKind::Overrun)?;
                }
            }
            Ok(())
        }
    }

    fn ready_display() -> Ssd1306<RecordingI2c> {
        let mut display = Ssd1306::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        display.init().unwrap();
        display
    }

    #[test]
    fn test_init_sends_sequence() {
        let display = ready_display();
        let i2c = display.release();

        assert!(i2c.writes.iter().all(|(addr, _)| *addr == DEFAULT_ADDRESS));
        assert!(i2c.commands().eq(INIT_SEQUENCE.iter().copied()));
    }

    #[test]
    fn test_flush_before_init_rejected() {
        let mut display = Ssd1306::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        assert_eq!(display.flush(), Err(Ssd1306Error::NotInitialized));
    }

    #[test]
    fn test_bus_error_surfaces() {
        let mut display = Ssd1306::new(
            RecordingI2c {
                fail: true,
                ..Default::default()
            },
            DEFAULT_ADDRESS,
        );
        assert_eq!(display.init(), Err(Ssd1306Error::I2c(ErrorKind::Other)));
    }

    #[test]
    fn test_set_pixel_page_layout() {
        let mut display = Ssd1306::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        display.set_pixel(5, 9, true);

        assert_eq!(display.buffer[1][5], 0b0000_0010);
        assert!(display.pixel(5, 9));

        display.set_pixel(5, 9, false);
        assert!(!display.pixel(5, 9));

        // Ignored, not panicking
        display.set_pixel(-1, 0, true);
        display.set_pixel(128, 0, true);
        display.set_pixel(0, 64, true);
    }

    #[test]
    fn test_rect_outline_only() {
        let mut display = ready_display();
        display.draw_rect(3, 3, 122, 58, false).unwrap();

        assert!(display.pixel(3, 3));
        assert!(display.pixel(124, 3));
        assert!(display.pixel(3, 60));
        assert!(display.pixel(124, 60));
        assert!(display.pixel(64, 3));
        assert!(!display.pixel(64, 30));
        assert!(!display.pixel(2, 2));
        assert!(!display.pixel(125, 61));
    }

    #[test]
    fn test_rect_filled() {
        let mut display = ready_display();
        display.draw_rect(10, 10, 4, 4, true).unwrap();

        assert!(display.pixel(11, 11));
        assert!(display.pixel(13, 13));
        assert!(!display.pixel(14, 14));
    }

    #[test]
    fn test_text_stays_in_cell() {
        let mut display = ready_display();
        display.draw_text("8", 10, 10).unwrap();

        let lit = (0..WIDTH)
            .flat_map(|x| (0..HEIGHT).map(move |y| (x, y)))
            .filter(|&(x, y)| display.pixel(x, y))
            .count();
        assert!(lit > 0);

        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                if display.pixel(x, y) {
                    assert!((10..16).contains(&x) && (10..20).contains(&y));
                }
            }
        }
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut display = ready_display();
        display.draw_text(" ", 10, 10).unwrap();
        assert!(display.buffer.iter().all(|page| page.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_clear_wipes_buffer() {
        let mut display = ready_display();
        display.draw_rect(0, 0, 128, 64, true).unwrap();
        FrameBuffer::clear(&mut display).unwrap();
        assert!(!display.pixel(0, 0));
        assert!(!display.pixel(127, 63));
    }

    #[test]
    fn test_flush_sends_all_pages() {
        let mut display = ready_display();
        display.set_pixel(0, 0, true);
        display.set_pixel(127, 63, true);
        display.flush().unwrap();

        let i2c = display.release();
        let pages: heapless::Vec<&[u8], 8> = i2c.data_pages().collect();
        assert_eq!(pages.len(), PAGES);
        assert!(pages.iter().all(|p| p.len() == WIDTH));
        assert_eq!(pages[0][0], 0b0000_0001);
        assert_eq!(pages[7][127], 0b1000_0000);

        let window: heapless::Vec<u8, 8> =
            i2c.commands().skip(INIT_SEQUENCE.len()).collect();
        assert_eq!(
            window.as_slice(),
            &[cmd::SET_COLUMN_ADDR, 0, 127, cmd::SET_PAGE_ADDR, 0, 7]
        );
    }
}
