//! Output device traits
//!
//! These traits define the interface between the rendering logic and
//! the two opaque output devices on the board.

pub mod display;
pub mod matrix;

pub use display::FrameBuffer;
pub use matrix::PixelStream;
