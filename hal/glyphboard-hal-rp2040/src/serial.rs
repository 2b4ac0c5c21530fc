//! Console receive over a buffered UART
//!
//! The UART interrupt fills a ring buffer in the background; polling only
//! drains what has already arrived.

use embassy_rp::uart::BufferedUartRx;
use embedded_io::{Read, ReadReady};
use glyphboard_hal::SerialRx;

/// Non-blocking console receiver
pub struct UartConsole {
    rx: BufferedUartRx,
}

impl UartConsole {
    pub fn new(rx: BufferedUartRx) -> Self {
        Self { rx }
    }
}

impl SerialRx for UartConsole {
    fn poll_byte(&mut self) -> Option<u8> {
        // Read errors (overrun, framing, break) are treated as "nothing pending"
        match self.rx.read_ready() {
            Ok(true) => {}
            _ => return None,
        }

        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}
