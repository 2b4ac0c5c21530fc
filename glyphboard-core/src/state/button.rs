//! Button channels and edge debouncing
//!
//! Each button owns one channel. The channel is written only by that
//! button's edge handler and read by the main loop, so plain atomic
//! loads and stores are enough: there is never a second writer.

use glyphboard_hal::OutputPin;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Default minimum spacing between accepted edges (µs)
pub const DEBOUNCE_WINDOW_US: u32 = 200_000;

/// Physical push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Toggles the green LED
    A,
    /// Toggles the blue LED
    B,
}

impl ButtonId {
    /// Name of the LED this button drives, as shown on screen
    pub const fn led_label(self) -> &'static str {
        match self {
            ButtonId::A => "LED Verde",
            ButtonId::B => "LED Azul",
        }
    }
}

/// Result of feeding one edge to a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge accepted; the channel now holds `on`
    Accepted { on: bool },
    /// Edge fell inside the debounce window and was dropped
    Rejected,
}

impl EdgeOutcome {
    /// True if the edge toggled the channel
    pub const fn is_accepted(&self) -> bool {
        matches!(self, EdgeOutcome::Accepted { .. })
    }
}

/// Debounce decision for an edge at `now_us`
///
/// `last_toggle_us` is `None` until the first accepted edge, which is
/// always accepted. After that an edge passes only if strictly more than
/// `window_us` has elapsed. The clock is a wrapping 32-bit microsecond
/// counter, so the difference is taken modulo 2^32.
pub const fn debounce(now_us: u32, last_toggle_us: Option<u32>, window_us: u32) -> bool {
    match last_toggle_us {
        None => true,
        Some(last) => now_us.wrapping_sub(last) > window_us,
    }
}

/// Toggle state for one button
pub struct ButtonChannel {
    id: ButtonId,
    last_toggle_us: AtomicU32,
    has_toggled: AtomicBool,
    on: AtomicBool,
}

impl ButtonChannel {
    /// Create a channel in its power-on state (off, never toggled)
    pub const fn new(id: ButtonId) -> Self {
        Self {
            id,
            last_toggle_us: AtomicU32::new(0),
            has_toggled: AtomicBool::new(false),
            on: AtomicBool::new(false),
        }
    }

    /// Button this channel belongs to
    pub const fn id(&self) -> ButtonId {
        self.id
    }

    /// Current toggle state
    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Acquire)
    }

    /// Timestamp of the last accepted edge, if any
    pub fn last_toggle_us(&self) -> Option<u32> {
        if self.has_toggled.load(Ordering::Relaxed) {
            Some(self.last_toggle_us.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    /// Handle a falling edge seen at `now_us`
    ///
    /// On acceptance the state flips and `led` is driven to the new state
    /// before returning. A rejected edge changes nothing. Must only be
    /// called from this button's edge handler.
    pub fn on_falling_edge<P: OutputPin>(
        &self,
        now_us: u32,
        window_us: u32,
        led: &mut P,
    ) -> EdgeOutcome {
        if !debounce(now_us, self.last_toggle_us(), window_us) {
            return EdgeOutcome::Rejected;
        }

        self.last_toggle_us.store(now_us, Ordering::Relaxed);
        self.has_toggled.store(true, Ordering::Relaxed);

        let on = !self.on.load(Ordering::Relaxed);
        self.on.store(on, Ordering::Release);
        led.set_state(on);

        EdgeOutcome::Accepted { on }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePin;
    use proptest::prelude::*;

    #[test]
    fn test_first_edge_always_accepted() {
        assert!(debounce(0, None, DEBOUNCE_WINDOW_US));
        assert!(debounce(5, None, DEBOUNCE_WINDOW_US));
    }

    #[test]
    fn test_window_boundary_is_strict() {
        assert!(!debounce(200_000, Some(0), DEBOUNCE_WINDOW_US));
        assert!(debounce(200_001, Some(0), DEBOUNCE_WINDOW_US));
    }

    #[test]
    fn test_wrapping_clock() {
        let last = u32::MAX - 50_000;
        assert!(!debounce(100_000, Some(last), DEBOUNCE_WINDOW_US));
        assert!(debounce(160_000, Some(last), DEBOUNCE_WINDOW_US));
    }

    #[test]
    fn test_channel_toggles_and_drives_led() {
        let channel = ButtonChannel::new(ButtonId::A);
        let mut led = FakePin::default();

        assert!(!channel.is_on());
        assert_eq!(
            channel.on_falling_edge(0, DEBOUNCE_WINDOW_US, &mut led),
            EdgeOutcome::Accepted { on: true }
        );
        assert!(channel.is_on());
        assert!(led.high);
        assert_eq!(channel.last_toggle_us(), Some(0));
    }

    #[test]
    fn test_bounce_rejected_without_side_effects() {
        let channel = ButtonChannel::new(ButtonId::B);
        let mut led = FakePin::default();

        channel.on_falling_edge(1_000, DEBOUNCE_WINDOW_US, &mut led);
        let writes = led.writes;

        assert_eq!(
            channel.on_falling_edge(101_000, DEBOUNCE_WINDOW_US, &mut led),
            EdgeOutcome::Rejected
        );
        assert!(channel.is_on());
        assert_eq!(led.writes, writes);
        assert_eq!(channel.last_toggle_us(), Some(1_000));
    }

    #[test]
    fn test_rejected_edge_does_not_extend_window() {
        let channel = ButtonChannel::new(ButtonId::A);
        let mut led = FakePin::default();

        channel.on_falling_edge(0, DEBOUNCE_WINDOW_US, &mut led);
        channel.on_falling_edge(150_000, DEBOUNCE_WINDOW_US, &mut led);
        assert!(channel
            .on_falling_edge(210_000, DEBOUNCE_WINDOW_US, &mut led)
            .is_accepted());
        assert!(!channel.is_on());
        assert!(!led.high);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ButtonId::A.led_label(), "LED Verde");
        assert_eq!(ButtonId::B.led_label(), "LED Azul");
    }

    proptest! {
        #[test]
        fn prop_second_edge_accepted_iff_past_window(start in any::<u32>(), dt in 0u32..1_000_000) {
            let channel = ButtonChannel::new(ButtonId::A);
            let mut led = FakePin::default();

            channel.on_falling_edge(start, DEBOUNCE_WINDOW_US, &mut led);
            let before = channel.is_on();
            let outcome = channel.on_falling_edge(start.wrapping_add(dt), DEBOUNCE_WINDOW_US, &mut led);

            if dt > DEBOUNCE_WINDOW_US {
                prop_assert_eq!(outcome, EdgeOutcome::Accepted { on: !before });
                prop_assert_eq!(channel.is_on(), !before);
            } else {
                prop_assert_eq!(outcome, EdgeOutcome::Rejected);
                prop_assert_eq!(channel.is_on(), before);
            }
            prop_assert_eq!(led.high, channel.is_on());
        }
    }
}
