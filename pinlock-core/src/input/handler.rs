//! Debounced button handler
//!
//! A press counts only if the line still reads high after the settle
//! window; shorter glitches are dropped without feedback. After an action
//! fires, nothing else fires until every button reads released, so a held
//! button never repeats.

use super::action::Action;
use crate::state::{KeypadState, OperatingMode};
use crate::traits::{Clock, DigitalIo, InputLine};

/// Button bindings for simple mode, in priority order
///
/// Digit edits the cell under the cursor in either mode.
const SIMPLE_BINDINGS: [(InputLine, Action); 3] = [
    (InputLine::Clear, Action::Clear),
    (InputLine::Advance, Action::Shift),
    (InputLine::Digit, Action::IncrementCell),
];

/// Button bindings for advanced mode, in priority order
const ADVANCED_BINDINGS: [(InputLine, Action); 4] = [
    (InputLine::Clear, Action::Clear),
    (InputLine::Advance, Action::CursorForward),
    (InputLine::Decrement, Action::CursorBackward),
    (InputLine::Digit, Action::IncrementCell),
];

/// Button bindings for a mode, highest priority first
pub fn bindings(mode: OperatingMode) -> &'static [(InputLine, Action)] {
    match mode {
        OperatingMode::Simple => &SIMPLE_BINDINGS,
        OperatingMode::Advanced => &ADVANCED_BINDINGS,
    }
}

/// Button poller with the shared "available" latch
#[derive(Debug, Clone)]
pub struct InputHandler {
    settle_us: u32,
    available: bool,
}

impl InputHandler {
    /// Create a handler; the latch starts armed
    pub fn new(settle_us: u32) -> Self {
        Self {
            settle_us,
            available: true,
        }
    }

    /// Whether the next confirmed press will fire
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Poll the buttons once and apply at most one action
    ///
    /// The mode switch is not a button here: it is sampled by the main
    /// loop and never blocks the latch.
    pub fn poll<IO: DigitalIo, C: Clock>(
        &mut self,
        state: &mut KeypadState,
        io: &mut IO,
        clock: &mut C,
    ) -> Option<Action> {
        if InputLine::BUTTONS.iter().all(|&line| !io.read(line)) {
            self.available = true;
            return None;
        }

        if !self.available {
            return None;
        }

        for &(line, action) in bindings(state.mode) {
            if self.confirm(line, io, clock) {
                self.available = false;
                action.apply(state);
                #[cfg(feature = "defmt")]
                defmt::debug!("button {} -> {}", line, action);
                return Some(action);
            }
        }

        None
    }

    /// High now and still high after the settle window
    fn confirm<IO: DigitalIo, C: Clock>(&self, line: InputLine, io: &mut IO, clock: &mut C) -> bool {
        if !io.read(line) {
            return false;
        }
        clock.delay_us(self.settle_us);
        io.read(line)
    }
}
