//! Editing actions

use crate::state::{next_digit, KeypadState, CELL_COUNT, EMPTY};

/// What a confirmed button press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Buffer emptied, pointers reset
    Clear,
    /// Slot 0 committed and the buffer shifted toward slot 3 (simple mode)
    Shift,
    /// Cursor moved toward slot 3; past slot 3 it forces a check
    CursorForward,
    /// Cursor moved toward slot 0, wrapping to slot 3
    CursorBackward,
    /// Cell under the cursor incremented (both modes)
    IncrementCell,
}

impl Action {
    /// Apply the action to the keypad state
    pub fn apply(self, state: &mut KeypadState) {
        match self {
            Action::Clear => state.clear(),
            Action::Shift => {
                state.filled = (state.filled + 1).min(CELL_COUNT as u8);
                // The digit that fills the buffer stays put for the check
                if usize::from(state.filled) < CELL_COUNT {
                    state.buffer.copy_within(0..CELL_COUNT - 1, 1);
                    state.buffer[0] = EMPTY;
                }
            }
            Action::CursorForward => {
                state.cursor = (state.cursor + 1).min(CELL_COUNT as u8);
            }
            Action::CursorBackward => {
                state.cursor = match state.cursor {
                    0 => CELL_COUNT as u8 - 1,
                    c if usize::from(c) >= CELL_COUNT => CELL_COUNT as u8 - 1,
                    c => c - 1,
                };
            }
            Action::IncrementCell => {
                if let Some(cell) = state.buffer.get_mut(usize::from(state.cursor)) {
                    *cell = next_digit(*cell);
                }
            }
        }
    }
}
