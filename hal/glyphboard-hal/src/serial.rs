//! Serial console abstractions
//!
//! The console is consumed one character at a time with a zero-wait poll.
//! There is no error channel: a read fault, an empty read and "nothing
//! pending" all look the same to the caller.

/// Non-blocking serial receiver
pub trait SerialRx {
    /// Poll for a single received byte
    ///
    /// Must return immediately. Returns `None` when no byte is pending.
    fn poll_byte(&mut self) -> Option<u8>;
}

impl<T: SerialRx + ?Sized> SerialRx for &mut T {
    fn poll_byte(&mut self) -> Option<u8> {
        (**self).poll_byte()
    }
}

/// Serial console configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { baudrate: 115200 }
    }
}
