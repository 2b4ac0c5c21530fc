//! Board hardware configuration
//!
//! Typed description of the pins and buses used by the demo, with a
//! compile-time check that no GPIO is claimed twice.

use glyphboard_hal::serial::SerialConfig;

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }
}

/// Status LED outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// Green LED, toggled by button A
    pub green: PinConfig,
    /// Blue LED, toggled by button B
    pub blue: PinConfig,
    /// Red LED, held low
    pub red: PinConfig,
}

/// Push buttons (active low, falling-edge interrupts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub a: PinConfig,
    pub b: PinConfig,
}

/// OLED display on the two-wire bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub sda: PinConfig,
    pub scl: PinConfig,
    /// 7-bit I2C address
    pub address: u8,
    /// Bus clock in Hz
    pub frequency_hz: u32,
}

/// Addressable LED matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Single data output driven by the pixel stream peripheral
    pub data: PinConfig,
}

/// Serial console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    pub tx: PinConfig,
    pub rx: PinConfig,
    pub serial: SerialConfig,
}

/// Loop and debounce timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Minimum spacing between accepted edges of one button (µs)
    pub debounce_window_us: u32,
    /// Idle sleep at the end of every main loop iteration (ms)
    pub idle_sleep_ms: u64,
}

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number out of range
    InvalidPin(u8),
    /// Same GPIO assigned to two functions
    DuplicatePin(u8),
}

/// Complete board description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub leds: LedConfig,
    pub buttons: ButtonConfig,
    pub display: DisplayConfig,
    pub matrix: MatrixConfig,
    pub console: ConsoleConfig,
    pub timing: TimingConfig,
}

impl BoardConfig {
    /// BitDogLab layout (Raspberry Pi Pico W carrier)
    pub const BITDOGLAB: Self = Self {
        leds: LedConfig {
            green: PinConfig::new(11),
            blue: PinConfig::new(12),
            red: PinConfig::new(13),
        },
        buttons: ButtonConfig {
            a: PinConfig::with_pullup(5),
            b: PinConfig::with_pullup(6),
        },
        display: DisplayConfig {
            sda: PinConfig::with_pullup(14),
            scl: PinConfig::with_pullup(15),
            address: 0x3C,
            frequency_hz: 400_000,
        },
        matrix: MatrixConfig {
            data: PinConfig::new(7),
        },
        console: ConsoleConfig {
            tx: PinConfig::new(0),
            rx: PinConfig::new(1),
            serial: SerialConfig { baudrate: 115200 },
        },
        timing: TimingConfig {
            debounce_window_us: 200_000,
            idle_sleep_ms: 50,
        },
    };

    /// All GPIOs claimed by this configuration
    pub const fn pins(&self) -> [u8; 10] {
        [
            self.leds.green.pin,
            self.leds.blue.pin,
            self.leds.red.pin,
            self.buttons.a.pin,
            self.buttons.b.pin,
            self.display.sda.pin,
            self.display.scl.pin,
            self.matrix.data.pin,
            self.console.tx.pin,
            self.console.rx.pin,
        ]
    }

    /// Check pin ranges and uniqueness
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.pins();
        let mut i = 0;
        while i < pins.len() {
            if pins[i] >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pins[i]));
            }
            let mut j = i + 1;
            while j < pins.len() {
                if pins[i] == pins[j] {
                    return Err(ConfigError::DuplicatePin(pins[i]));
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }
}

const _: () = assert!(BoardConfig::BITDOGLAB.validate().is_ok());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitdoglab_is_valid() {
        assert_eq!(BoardConfig::BITDOGLAB.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut config = BoardConfig::BITDOGLAB;
        config.leds.red = PinConfig::new(7);
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(7)));
    }

    #[test]
    fn test_out_of_range_pin_rejected() {
        let mut config = BoardConfig::BITDOGLAB;
        config.buttons.b = PinConfig::with_pullup(30);
        assert_eq!(config.validate(), Err(ConfigError::InvalidPin(30)));
    }

    #[test]
    fn test_buttons_pulled_up() {
        let config = BoardConfig::BITDOGLAB;
        assert!(config.buttons.a.pull_up);
        assert!(config.buttons.b.pull_up);
        assert!(!config.leds.green.pull_up);
    }

    #[test]
    fn test_timing_defaults() {
        let timing = BoardConfig::BITDOGLAB.timing;
        assert_eq!(timing.debounce_window_us, 200_000);
        assert_eq!(timing.idle_sleep_ms, 50);
    }
}
