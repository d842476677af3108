//! Display multiplexer
//!
//! Every strobe follows the same order: pattern onto the bus, select one
//! anode, hold, blank all anodes. Blanking before the next pattern is
//! written keeps the previous digit's segments from ghosting onto its
//! neighbour.

use crate::traits::{Clock, DigitalIo, InputLine, OutputLine, Slot};

/// Anode and segment-bus driver borrowed from the board for one render
pub struct Multiplexer<'a, IO> {
    io: &'a mut IO,
}

impl<'a, IO: DigitalIo> Multiplexer<'a, IO> {
    /// Wrap the board I/O
    pub fn new(io: &'a mut IO) -> Self {
        Self { io }
    }

    /// Put a pattern on the shared segment bus
    pub fn write_segments(&mut self, pattern: u8) {
        self.io.write_segments(pattern);
    }

    /// Select exactly one digit: its anode low, the other three high
    ///
    /// The other anodes are released before the selected one is pulled
    /// low, so two digits are never selected at once.
    pub fn activate(&mut self, slot: Slot) {
        for other in Slot::ALL {
            if other != slot {
                self.io.write(OutputLine::Anode(other), true);
            }
        }
        self.io.write(OutputLine::Anode(slot), false);
    }

    /// Deselect all four digits
    pub fn blank_all(&mut self) {
        for slot in Slot::ALL {
            self.io.write(OutputLine::Anode(slot), true);
        }
    }

    /// Light one digit for `hold_us`, then blank
    pub fn strobe<C: Clock>(&mut self, slot: Slot, pattern: u8, hold_us: u32, clock: &mut C) {
        self.write_segments(pattern);
        self.activate(slot);
        clock.delay_us(hold_us);
        self.blank_all();
    }

    /// Sample an input between strobes
    pub fn read(&mut self, line: InputLine) -> bool {
        self.io.read(line)
    }
}
