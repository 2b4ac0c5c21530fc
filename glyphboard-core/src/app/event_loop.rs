//! Serial polling, dispatch and refresh-flag consumption

use glyphboard_hal::SerialRx;
use heapless::Vec;

use crate::display::refresh;
use crate::matrix::{render_digit, Digit};
use crate::state::SharedState;
use crate::traits::{FrameBuffer, PixelStream};

/// Character shown before any input, and on button-triggered refreshes
pub const BLANK: char = ' ';

/// Device failure swallowed during an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopError<ME, FE> {
    /// Pixel stream write failed while rendering a digit
    Matrix(ME),
    /// Frame buffer operation failed during a refresh
    Display(FE),
}

/// What one iteration did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport<ME, FE> {
    /// Character read from the console, if any
    pub typed: Option<char>,
    /// Digit sent to the matrix, if any
    pub rendered: Option<Digit>,
    /// Number of display refreshes issued (0-2)
    pub refreshes: u8,
    /// Whether a button edge triggered one of the refreshes
    pub button_refresh: bool,
    /// Failures encountered; the iteration carried on past each one
    pub errors: Vec<LoopError<ME, FE>, 3>,
}

impl<ME, FE> StepReport<ME, FE> {
    fn new() -> Self {
        Self {
            typed: None,
            rendered: None,
            refreshes: 0,
            button_refresh: false,
            errors: Vec::new(),
        }
    }

    /// True when nothing happened this iteration
    pub fn is_idle(&self) -> bool {
        self.typed.is_none() && self.refreshes == 0
    }

    fn record(&mut self, error: LoopError<ME, FE>) {
        let _ = self.errors.push(error);
    }
}

/// Main loop state and the devices it drives
pub struct EventLoop<S, M, F> {
    serial: S,
    matrix: M,
    display: F,
    last_char: char,
}

impl<S, M, F> EventLoop<S, M, F>
where
    S: SerialRx,
    M: PixelStream,
    F: FrameBuffer,
{
    /// Create the loop with no character typed yet
    pub fn new(serial: S, matrix: M, display: F) -> Self {
        Self {
            serial,
            matrix,
            display,
            last_char: BLANK,
        }
    }

    /// Most recent character read from the console
    pub fn last_char(&self) -> char {
        self.last_char
    }

    /// Pixel stream driven by the loop
    pub fn matrix(&mut self) -> &mut M {
        &mut self.matrix
    }

    /// Frame buffer driven by the loop
    pub fn display(&mut self) -> &mut F {
        &mut self.display
    }

    /// Run one iteration
    ///
    /// 1. Poll the console once without waiting.
    /// 2. On a character: remember it, render it on the matrix if it is a
    ///    digit, then refresh the display showing it.
    /// 3. If a button raised the refresh flag: consume it and refresh the
    ///    display with a blank character slot. The remembered character is
    ///    left alone.
    ///
    /// Device errors never cut the iteration short.
    pub fn step(&mut self, shared: &SharedState) -> StepReport<M::Error, F::Error> {
        let mut report = StepReport::new();

        if let Some(byte) = self.serial.poll_byte() {
            let ch = char::from(byte);
            self.last_char = ch;
            report.typed = Some(ch);

            if let Some(digit) = Digit::from_ascii(byte) {
                match render_digit(&mut self.matrix, digit) {
                    Ok(()) => report.rendered = Some(digit),
                    Err(e) => report.record(LoopError::Matrix(e)),
                }
            }

            report.refreshes += 1;
            if let Err(e) = refresh(&mut self.display, ch, shared.leds()) {
                report.record(LoopError::Display(e));
            }
        }

        if shared.take_dirty() {
            report.button_refresh = true;
            report.refreshes += 1;
            if let Err(e) = refresh(&mut self.display, BLANK, shared.leds()) {
                report.record(LoopError::Display(e));
            }
        }

        report
    }
}
