//! Host fakes for the device traits

use glyphboard_hal::{OutputPin, SerialRx};
use heapless::{Deque, String, Vec};

use crate::traits::{FrameBuffer, PixelStream};

/// Error raised by a fake when told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

/// Pixel stream that records every word written
#[derive(Default)]
pub struct RecordingStream {
    pub words: Vec<u32, 128>,
    pub fail: bool,
}

impl PixelStream for RecordingStream {
    type Error = Fault;

    fn write(&mut self, word: u32) -> Result<(), Fault> {
        if self.fail {
            return Err(Fault);
        }
        self.words.push(word).map_err(|_| Fault)
    }
}

/// One recorded frame buffer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Clear,
    Rect {
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        filled: bool,
    },
    Text {
        text: String<16>,
        x: u8,
        y: u8,
    },
    Flush,
}

/// Frame buffer that records the command sequence
#[derive(Default)]
pub struct RecordingFrameBuffer {
    pub commands: Vec<Command, 64>,
    pub fail: bool,
}

impl RecordingFrameBuffer {
    /// Number of completed refreshes (flushes)
    pub fn flushes(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Flush))
            .count()
    }

    /// Text drawn at a position during the last refresh
    pub fn last_text_at(&self, x: u8, y: u8) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::Text { text, x: tx, y: ty } if *tx == x && *ty == y => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, command: Command) -> Result<(), Fault> {
        if self.fail {
            return Err(Fault);
        }
        self.commands.push(command).map_err(|_| Fault)
    }
}

impl FrameBuffer for RecordingFrameBuffer {
    type Error = Fault;

    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 64;

    fn clear(&mut self) -> Result<(), Fault> {
        self.record(Command::Clear)
    }

    fn draw_rect(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        filled: bool,
    ) -> Result<(), Fault> {
        self.record(Command::Rect {
            x,
            y,
            width,
            height,
            filled,
        })
    }

    fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), Fault> {
        let mut owned = String::new();
        owned.push_str(text).map_err(|_| Fault)?;
        self.record(Command::Text { text: owned, x, y })
    }

    fn flush(&mut self) -> Result<(), Fault> {
        self.record(Command::Flush)
    }
}

/// Output pin that remembers its level
#[derive(Default)]
pub struct FakePin {
    pub high: bool,
    pub writes: usize,
}

impl OutputPin for FakePin {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Serial source fed from a script of pending bytes
#[derive(Default)]
pub struct ScriptedSerial {
    pending: Deque<u8, 32>,
}

impl ScriptedSerial {
    pub fn new(bytes: &[u8]) -> Self {
        let mut serial = Self::default();
        serial.feed(bytes);
        serial
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let _ = self.pending.push_back(b);
        }
    }
}

impl SerialRx for ScriptedSerial {
    fn poll_byte(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}
