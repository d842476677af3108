//! Input buffer cells and sentinels
//!
//! Each cell holds a digit `0..=9`, [`EMPTY`], or one of the two display
//! sentinels written by the password checker.

/// Number of cells in the input buffer
pub const CELL_COUNT: usize = 4;

/// Cell has not been entered yet
pub const EMPTY: u8 = 0x0A;

/// Buffer-wide marker for an accepted password
pub const SUCCESS: u8 = 0xFF;

/// Buffer-wide marker for a rejected password
pub const ERROR: u8 = 0xF7;

/// The four-cell input buffer
pub type Buffer = [u8; CELL_COUNT];

/// What the renderer draws, keyed by the first cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Echo the buffer, blinking the cursor digit
    Digits,
    /// Scroll the device banner
    Success,
    /// Blink the error banner
    Error,
}

impl DisplayMode {
    /// Mode for a buffer; only cell 0 is inspected
    pub fn of(buffer: &Buffer) -> Self {
        match buffer[0] {
            SUCCESS => DisplayMode::Success,
            ERROR => DisplayMode::Error,
            _ => DisplayMode::Digits,
        }
    }
}

/// Next value for a digit button press
///
/// Digits wrap 9 → 0. [`EMPTY`] and the sentinels start over at 0.
pub fn next_digit(value: u8) -> u8 {
    if value >= 9 {
        0
    } else {
        value + 1
    }
}
