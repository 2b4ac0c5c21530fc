//! PIO-based WS2812 pixel stream
//!
//! Uses RP2040's Programmable I/O to generate the 800 kHz single-wire
//! protocol. The CPU pushes one 32-bit word per LED into the TX FIFO;
//! the state machine shifts out the top 24 bits (G, R, B) MSB first.
//!
//! # Timing
//!
//! Each bit takes 10 PIO cycles: 3 low, 2 high, then 5 high for a one
//! or 5 low for a zero. Running the state machine at 10x the bit rate
//! gives 1.25 µs per bit.

use core::convert::Infallible;

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;
use glyphboard_core::traits::PixelStream;

/// WS2812 bit rate in kHz
pub const BIT_RATE_KHZ: u32 = 800;

/// PIO cycles per transmitted bit
const CYCLES_PER_BIT: u32 = 10;

/// Bits per pixel word (GRB, 8 bits each)
const BITS_PER_PIXEL: u8 = 24;

/// PIO WS2812 driver
///
/// Owns one state machine. Writes block until the TX FIFO has room.
pub struct PioWs2812<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812<'d, PIO, SM> {
    /// Load the WS2812 program and start the state machine on `pin`
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, DATA>,
    ) -> Self {
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]", // Low phase, fetch next bit
            "    jmp !x do_zero side 1 [1]", // Rising edge
            "    jmp bitloop    side 1 [4]", // One: stay high
            "do_zero:",
            "    nop            side 0 [4]", // Zero: drop low
            ".wrap"
        );

        let installed = common.load_program(&prg.program);
        let data_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pin]);

        // clk_sys / (800 kHz * 10 cycles), in kHz to stay inside 24 integer bits
        let clock_khz = U24F8::from_num(clk_sys_freq() / 1000);
        let bit_khz = U24F8::from_num(BIT_RATE_KHZ * CYCLES_PER_BIT);
        cfg.clock_divider = clock_khz / bit_khz;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<PIO: Instance, const SM: usize> PixelStream for PioWs2812<'_, PIO, SM> {
    type Error = Infallible;

    fn write(&mut self, word: u32) -> Result<(), Self::Error> {
        while !self.sm.tx().try_push(word) {
            cortex_m::asm::nop();
        }
        Ok(())
    }
}
