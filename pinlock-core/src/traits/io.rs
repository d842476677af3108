//! Digital I/O capability
//!
//! The board exposes five active-high inputs and thirteen outputs: four
//! active-low anode enables, an 8-bit segment bus shared by all digits, and
//! a status LED.

/// Number of display digits
pub const SLOT_COUNT: usize = 4;

/// Width of the shared segment bus
pub const SEGMENT_BITS: u8 = 8;

/// Button and switch inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    /// Shift-in (simple mode) or cursor forward (advanced mode)
    Advance,
    /// Cursor backward (advanced mode)
    Decrement,
    /// Increment the cell under the cursor, in either mode
    Digit,
    /// Reset the buffer and both pointers
    Clear,
    /// Latching simple/advanced mode switch
    Mode,
}

impl InputLine {
    /// All inputs, in pin order
    pub const ALL: [InputLine; 5] = [
        InputLine::Advance,
        InputLine::Decrement,
        InputLine::Digit,
        InputLine::Clear,
        InputLine::Mode,
    ];

    /// Momentary push buttons (everything except the mode switch)
    pub const BUTTONS: [InputLine; 4] = [
        InputLine::Advance,
        InputLine::Decrement,
        InputLine::Digit,
        InputLine::Clear,
    ];

    /// Position of this line in [`InputLine::ALL`]
    pub const fn index(self) -> usize {
        match self {
            InputLine::Advance => 0,
            InputLine::Decrement => 1,
            InputLine::Digit => 2,
            InputLine::Clear => 3,
            InputLine::Mode => 4,
        }
    }
}

/// One of the four display digits
///
/// Slot 0 is the rightmost digit. Text that enters at slot 0 and moves
/// toward slot 3 scrolls right to left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    S0,
    S1,
    S2,
    S3,
}

impl Slot {
    /// All slots in refresh order
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::S0, Slot::S1, Slot::S2, Slot::S3];

    /// Slot for a zero-based position, if it exists
    pub const fn from_index(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::S0),
            1 => Some(Slot::S1),
            2 => Some(Slot::S2),
            3 => Some(Slot::S3),
            _ => None,
        }
    }

    /// Zero-based position
    pub const fn index(self) -> usize {
        match self {
            Slot::S0 => 0,
            Slot::S1 => 1,
            Slot::S2 => 2,
            Slot::S3 => 3,
        }
    }
}

/// Output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputLine {
    /// Anode enable of one digit (low selects)
    Anode(Slot),
    /// One bit of the segment bus, `0..SEGMENT_BITS` (low lights the segment)
    Segment(u8),
    /// Mode indicator LED
    StatusLed,
}

/// Digital I/O capability injected into the keypad
pub trait DigitalIo {
    /// Sample an input; `true` while the button is pressed or the switch is on
    fn read(&mut self, line: InputLine) -> bool;

    /// Drive an output to a level
    fn write(&mut self, line: OutputLine, high: bool);

    /// Put a full pattern on the segment bus
    ///
    /// The default writes bit by bit; boards with a whole-port register
    /// can override it.
    fn write_segments(&mut self, pattern: u8) {
        for bit in 0..SEGMENT_BITS {
            self.write(OutputLine::Segment(bit), pattern & (1 << bit) != 0);
        }
    }
}

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    fn read(&mut self, line: InputLine) -> bool {
        (**self).read(line)
    }

    fn write(&mut self, line: OutputLine, high: bool) {
        (**self).write(line, high);
    }

    fn write_segments(&mut self, pattern: u8) {
        (**self).write_segments(pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index_round_trip() {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(Slot::from_index(i), Some(*slot));
        }
        assert_eq!(Slot::from_index(4), None);
    }

    #[test]
    fn test_buttons_exclude_mode_switch() {
        assert!(!InputLine::BUTTONS.contains(&InputLine::Mode));
        assert_eq!(InputLine::ALL[InputLine::Mode.index()], InputLine::Mode);
    }

    struct BusOnly {
        bus: u8,
    }

    impl DigitalIo for BusOnly {
        fn read(&mut self, _line: InputLine) -> bool {
            false
        }

        fn write(&mut self, line: OutputLine, high: bool) {
            if let OutputLine::Segment(bit) = line {
                if high {
                    self.bus |= 1 << bit;
                } else {
                    self.bus &= !(1 << bit);
                }
            }
        }
    }

    #[test]
    fn test_write_segments_sets_every_bit() {
        let mut io = BusOnly { bus: 0x00 };
        io.write_segments(0xA4);
        assert_eq!(io.bus, 0xA4);
        io.write_segments(0x5B);
        assert_eq!(io.bus, 0x5B);
    }
}
