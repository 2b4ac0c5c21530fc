//! Glyphboard - Demo Board Firmware
//!
//! Main firmware binary for RP2040-based demo boards.
//!
//! - Characters typed on the serial console are shown on the OLED, and
//!   digits are drawn on the 5x5 WS2812 matrix.
//! - Buttons A and B toggle the green and blue LEDs, debounced.
//! - The OLED mirrors the last character and both LED states.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glyphboard_core::app::EventLoop;
use glyphboard_core::matrix::clear_matrix;
use glyphboard_core::state::{ButtonId, SharedState};
use glyphboard_core::traits::FrameBuffer;
use glyphboard_drivers::display::Ssd1306;
use glyphboard_hal_rp2040::{LedPin, PioWs2812, UartConsole};

use crate::board::BOARD;

mod board;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Runs the button tasks from a software interrupt, preempting the main loop
static EXECUTOR_BUTTONS: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_BUTTONS.on_interrupt()
}

/// Button and refresh state shared between the button tasks and the main loop
pub static SHARED: SharedState = SharedState::new(BOARD.timing.debounce_window_us);

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Glyphboard firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console on UART0 (GPIO0 TX, GPIO1 RX)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BOARD.console.serial.baudrate;
    let tx_buf = TX_BUF.init([0; 16]);
    let rx_buf = RX_BUF.init([0; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();
    info!("Console initialized at {} baud", BOARD.console.serial.baudrate);

    // OLED on I2C1 (GPIO14 SDA, GPIO15 SCL)
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = BOARD.display.frequency_hz;
    i2c_config.sda_pullup = BOARD.display.sda.pull_up;
    i2c_config.scl_pullup = BOARD.display.scl.pull_up;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mut display = Ssd1306::new(i2c, BOARD.display.address);
    if let Err(e) = display.init() {
        warn!("Display init failed: {:?}", e);
    }
    if let Err(e) = display.clear().and_then(|()| display.flush()) {
        warn!("Display clear failed: {:?}", e);
    }
    info!("Display initialized");

    // WS2812 matrix on PIO0 SM0 (GPIO7)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let mut matrix = PioWs2812::new(&mut common, sm0, p.PIN_7);
    if let Err(e) = clear_matrix(&mut matrix) {
        warn!("Matrix clear failed: {:?}", e);
    }
    info!("LED matrix initialized");

    // Status LEDs start off; red is unused and held low
    let led_green = LedPin::new(Output::new(p.PIN_11, Level::Low));
    let led_blue = LedPin::new(Output::new(p.PIN_12, Level::Low));
    let _led_red = Output::new(p.PIN_13, Level::Low);

    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // Button tasks run above thread mode so an edge is stamped and its LED
    // driven while the main loop is blocked on the display bus
    interrupt::SWI_IRQ_0.set_priority(Priority::P2);
    let buttons = EXECUTOR_BUTTONS.start(interrupt::SWI_IRQ_0);
    buttons.spawn(tasks::button_task(ButtonId::A, button_a, led_green)).unwrap();
    buttons.spawn(tasks::button_task(ButtonId::B, button_b, led_blue)).unwrap();
    info!("Buttons armed");

    let mut app = EventLoop::new(UartConsole::new(rx), matrix, display);

    loop {
        let report = app.step(&SHARED);

        if let Some(ch) = report.typed {
            info!("Typed: {}", ch);
        }
        if let Some(digit) = report.rendered {
            debug!("Matrix showing {}", digit.value());
        }
        if report.button_refresh {
            debug!("Status refreshed: {}", SHARED.leds());
        }
        for e in report.errors.iter() {
            warn!("Device error: {:?}", e);
        }

        Timer::after_millis(BOARD.timing.idle_sleep_ms).await;
    }
}
