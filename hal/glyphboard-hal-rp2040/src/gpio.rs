//! GPIO output adapter

use embassy_rp::gpio::Output;
use glyphboard_hal::OutputPin;

/// Status LED driven by a push-pull output
pub struct LedPin<'d>(Output<'d>);

impl<'d> LedPin<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self(output)
    }
}

impl OutputPin for LedPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
