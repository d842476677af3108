//! Password verification
//!
//! Compares the buffer against the configured password and replaces the
//! whole buffer with the success or error marker. The render mode follows
//! from that marker on the next frame.

use crate::state::{Buffer, KeypadState, OperatingMode, CELL_COUNT, ERROR, SUCCESS};

/// Result of a password check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Buffer matched; now holds [`SUCCESS`]
    Granted,
    /// Buffer did not match; now holds [`ERROR`]
    Denied,
}

/// Checker for a fixed four-digit password
#[derive(Debug, Clone)]
pub struct PasswordChecker {
    password: Buffer,
}

impl PasswordChecker {
    pub fn new(password: Buffer) -> Self {
        Self { password }
    }

    /// Overwrite `buffer` with the verdict marker
    pub fn check_buffer(&self, buffer: &mut Buffer) -> Verdict {
        let verdict = if *buffer == self.password {
            Verdict::Granted
        } else {
            Verdict::Denied
        };

        *buffer = match verdict {
            Verdict::Granted => [SUCCESS; CELL_COUNT],
            Verdict::Denied => [ERROR; CELL_COUNT],
        };
        verdict
    }

    /// Check the keypad buffer and reset the pointers for the next entry
    ///
    /// The fill counter always restarts; the cursor restarts only in
    /// advanced mode.
    pub fn check(&self, state: &mut KeypadState) -> Verdict {
        let verdict = self.check_buffer(&mut state.buffer);
        state.filled = 0;
        if state.mode == OperatingMode::Advanced {
            state.cursor = 0;
        }
        verdict
    }
}
