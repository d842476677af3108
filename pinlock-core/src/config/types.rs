//! Configuration type definitions

use core::fmt;

use crate::state::{Buffer, CELL_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Factory password
pub const DEFAULT_PASSWORD: Buffer = [0x09, 0x05, 0x08, 0x03];

/// Software timing, calibrated for a 20 MHz oscillator
///
/// All timing is iteration based. Hold times are per digit; cycle counts
/// are full four-digit refresh passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// Digit hold time while echoing the buffer (µs)
    pub digit_hold_us: u32,
    /// Button settle window before the confirming re-read (µs)
    pub settle_us: u32,
    /// Refresh cycles per cursor blink period; the cursor is dark for the first half
    pub blink_period: u16,
    /// Digit hold time while scrolling the success banner (µs)
    pub scroll_hold_us: u32,
    /// Refresh cycles between banner scroll steps
    pub scroll_step_cycles: u16,
    /// Scroll steps per success animation
    pub scroll_steps: u8,
    /// Digit hold time for the error banner (µs)
    pub error_hold_us: u32,
    /// Error banner refresh passes per render call
    pub error_passes: u8,
    /// Render calls before the error banner blanks
    pub error_blink_after: u16,
    /// Blank time of the error blink (ms)
    pub error_blank_ms: u32,
}

impl Timing {
    /// Factory timing
    pub const DEFAULT: Timing = Timing {
        digit_hold_us: 500,
        settle_us: 40,
        blink_period: 250,
        scroll_hold_us: 800,
        scroll_step_cycles: 50,
        scroll_steps: 12,
        error_hold_us: 500,
        error_passes: 2,
        error_blink_after: 500,
        error_blank_ms: 500,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete keypad configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeypadConfig {
    /// Digits compared cell by cell against the buffer
    pub password: Buffer,
    /// Software timing
    pub timing: Timing,
}

impl KeypadConfig {
    /// Factory configuration
    pub const DEFAULT: KeypadConfig = KeypadConfig {
        password: DEFAULT_PASSWORD,
        timing: Timing::DEFAULT,
    };

    /// Check that the configuration can drive the loop
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, &value) in self.password.iter().enumerate() {
            if value > 9 {
                return Err(ConfigError::InvalidPasswordDigit { index, value });
            }
        }

        let timing = &self.timing;
        if timing.blink_period < 2 {
            return Err(ConfigError::BlinkPeriodTooShort);
        }
        if timing.scroll_step_cycles == 0 {
            return Err(ConfigError::ZeroScrollCycles);
        }
        if timing.scroll_steps == 0 {
            return Err(ConfigError::ZeroScrollSteps);
        }
        if timing.error_passes == 0 {
            return Err(ConfigError::ZeroErrorPasses);
        }

        Ok(())
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Password cell is not a decimal digit
    InvalidPasswordDigit { index: usize, value: u8 },
    /// Blink period cannot be split into a dark and a lit half
    BlinkPeriodTooShort,
    /// Banner would never advance
    ZeroScrollCycles,
    /// Success animation would be empty
    ZeroScrollSteps,
    /// Error banner would never be drawn
    ZeroErrorPasses,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPasswordDigit { index, value } => write!(
                f,
                "password cell {} of {} is {:#04x}, expected 0-9",
                index, CELL_COUNT, value
            ),
            ConfigError::BlinkPeriodTooShort => f.write_str("blink_period must be at least 2"),
            ConfigError::ZeroScrollCycles => f.write_str("scroll_step_cycles must be nonzero"),
            ConfigError::ZeroScrollSteps => f.write_str("scroll_steps must be nonzero"),
            ConfigError::ZeroErrorPasses => f.write_str("error_passes must be nonzero"),
        }
    }
}
