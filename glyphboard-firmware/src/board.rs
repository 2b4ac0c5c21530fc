//! Board selection
//!
//! Peripheral singletons are picked by name in `main`, so the pin numbers
//! in the board config are checked against those picks at compile time.

use glyphboard_core::config::BoardConfig;

/// Active board layout
pub const BOARD: BoardConfig = BoardConfig::BITDOGLAB;

const _: () = {
    assert!(BOARD.leds.green.pin == 11);
    assert!(BOARD.leds.blue.pin == 12);
    assert!(BOARD.leds.red.pin == 13);
    assert!(BOARD.buttons.a.pin == 5 && BOARD.buttons.a.pull_up);
    assert!(BOARD.buttons.b.pin == 6 && BOARD.buttons.b.pull_up);
    assert!(BOARD.matrix.data.pin == 7);
    assert!(BOARD.display.sda.pin == 14);
    assert!(BOARD.display.scl.pin == 15);
    assert!(BOARD.console.tx.pin == 0);
    assert!(BOARD.console.rx.pin == 1);
};
