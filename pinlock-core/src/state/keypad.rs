//! Buffer, cursor and mode owned by the main loop

use super::buffer::{Buffer, DisplayMode, CELL_COUNT, EMPTY};
use crate::traits::Slot;

/// Editing semantics selected by the mode switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Edit slot 0, then shift it toward slot 3
    #[default]
    Simple,
    /// Move a cursor over the cells and edit them in place
    Advanced,
}

impl OperatingMode {
    /// Mode for a sampled switch level
    pub fn from_switch(on: bool) -> Self {
        if on {
            OperatingMode::Advanced
        } else {
            OperatingMode::Simple
        }
    }
}

/// Entry state shared by the renderer, input handler and checker
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadState {
    /// The four cells
    pub buffer: Buffer,
    /// Primary pointer: cell edited in advanced mode, `0..=4`
    pub cursor: u8,
    /// Secondary pointer: digits committed since the last check in simple mode, `0..=4`
    pub filled: u8,
    /// Current editing semantics
    pub mode: OperatingMode,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadState {
    /// Power-on state: empty buffer, both pointers at 0
    pub const fn new() -> Self {
        Self {
            buffer: [EMPTY; CELL_COUNT],
            cursor: 0,
            filled: 0,
            mode: OperatingMode::Simple,
        }
    }

    /// Reset the buffer and both pointers
    ///
    /// The operating mode is left alone; it follows the switch.
    pub fn clear(&mut self) {
        self.buffer = [EMPTY; CELL_COUNT];
        self.cursor = 0;
        self.filled = 0;
    }

    /// Either pointer has reached the end of the buffer
    pub fn is_full(&self) -> bool {
        usize::from(self.cursor) >= CELL_COUNT || usize::from(self.filled) >= CELL_COUNT
    }

    /// Render mode selected by the buffer contents
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::of(&self.buffer)
    }

    /// Digit that blinks while editing
    pub fn blink_slot(&self) -> Option<Slot> {
        Slot::from_index(usize::from(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SUCCESS;

    #[test]
    fn test_power_on_state() {
        let state = KeypadState::new();
        assert_eq!(state.buffer, [EMPTY; 4]);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.filled, 0);
        assert_eq!(state.mode, OperatingMode::Simple);
        assert!(!state.is_full());
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut state = KeypadState {
            buffer: [SUCCESS; 4],
            cursor: 2,
            filled: 3,
            mode: OperatingMode::Advanced,
        };
        state.clear();
        assert_eq!(state.buffer, [EMPTY; 4]);
        assert_eq!((state.cursor, state.filled), (0, 0));
        assert_eq!(state.mode, OperatingMode::Advanced);
    }

    #[test]
    fn test_either_pointer_fills() {
        let mut state = KeypadState::new();
        state.cursor = 4;
        assert!(state.is_full());
        assert_eq!(state.blink_slot(), None);

        let mut state = KeypadState::new();
        state.filled = 4;
        assert!(state.is_full());
        assert_eq!(state.blink_slot(), Some(Slot::S0));
    }

    #[test]
    fn test_mode_from_switch() {
        assert_eq!(OperatingMode::from_switch(false), OperatingMode::Simple);
        assert_eq!(OperatingMode::from_switch(true), OperatingMode::Advanced);
    }
}
