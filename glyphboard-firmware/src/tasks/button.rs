//! Button edge task

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use glyphboard_core::state::{ButtonId, EdgeOutcome};
use glyphboard_hal_rp2040::LedPin;

use crate::SHARED;

/// One instance per button
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(id: ButtonId, mut button: Input<'static>, mut led: LedPin<'static>) {
    info!("Button {} task started", id);

    loop {
        button.wait_for_falling_edge().await;

        // 32-bit microsecond clock; debounce arithmetic wraps
        let now_us = Instant::now().as_micros() as u32;

        match SHARED.on_falling_edge(id, now_us, &mut led) {
            EdgeOutcome::Accepted { on } => {
                info!(
                    "Button {} pressed. {} {}",
                    id,
                    id.led_label(),
                    if on { "ON" } else { "OFF" }
                );
            }
            EdgeOutcome::Rejected => {
                trace!("Button {} bounce ignored at {}us", id, now_us);
            }
        }
    }
}
