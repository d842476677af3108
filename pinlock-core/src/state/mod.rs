//! Keypad state
//!
//! The input buffer, the two cursor pointers and the operating mode. The
//! main loop owns a single [`KeypadState`] and hands it by reference to
//! the renderer, the input handler and the password checker in turn.

pub mod buffer;
pub mod keypad;

pub use buffer::{next_digit, Buffer, DisplayMode, CELL_COUNT, EMPTY, ERROR, SUCCESS};
pub use keypad::{KeypadState, OperatingMode};
