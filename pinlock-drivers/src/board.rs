//! GPIO board binding
//!
//! Maps the keypad's logical lines onto individual HAL pins. Levels pass
//! through unchanged: buttons read high when pressed, an anode written low
//! selects its digit, a segment written low lights.

use pinlock_core::traits::{DigitalIo, InputLine, OutputLine, Slot, SLOT_COUNT};
use pinlock_hal::{InputPin, OutputPin};

/// Number of segment bus pins (a-g plus decimal point)
pub const SEGMENT_PINS: usize = 8;

/// Pin assignment for a keypad board
pub struct BoardPins<I, O> {
    pub advance: I,
    pub decrement: I,
    pub digit: I,
    pub clear: I,
    /// Mode switch (high = advanced)
    pub mode: I,
    /// Anode enables, slot 0 (rightmost digit) first
    pub anodes: [O; SLOT_COUNT],
    /// Segment bus, bit 0 (segment a) first
    pub segments: [O; SEGMENT_PINS],
    pub status_led: O,
}

/// Keypad board built from discrete pins
pub struct PinBoard<I, O> {
    /// Inputs indexed by [`InputLine::index`]
    inputs: [I; InputLine::ALL.len()],
    anodes: [O; SLOT_COUNT],
    segments: [O; SEGMENT_PINS],
    status_led: O,
}

impl<I: InputPin, O: OutputPin> PinBoard<I, O> {
    /// Take ownership of the pins and park the outputs
    ///
    /// All anodes are driven high (no digit selected), the bus goes dark
    /// and the status LED is turned off.
    pub fn new(pins: BoardPins<I, O>) -> Self {
        let mut board = Self {
            inputs: [pins.advance, pins.decrement, pins.digit, pins.clear, pins.mode],
            anodes: pins.anodes,
            segments: pins.segments,
            status_led: pins.status_led,
        };

        for anode in board.anodes.iter_mut() {
            anode.set_high();
        }
        for segment in board.segments.iter_mut() {
            segment.set_high();
        }
        board.status_led.set_low();
        board
    }

    /// Current level of an anode enable
    pub fn anode_is_high(&self, slot: Slot) -> bool {
        self.anodes[slot.index()].is_set_high()
    }

    /// Pattern currently driven onto the segment bus
    pub fn segment_pattern(&self) -> u8 {
        self.segments
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, pin)| {
                if pin.is_set_high() {
                    acc | (1 << bit)
                } else {
                    acc
                }
            })
    }

    /// Give the pins back
    pub fn release(self) -> BoardPins<I, O> {
        let [advance, decrement, digit, clear, mode] = self.inputs;
        BoardPins {
            advance,
            decrement,
            digit,
            clear,
            mode,
            anodes: self.anodes,
            segments: self.segments,
            status_led: self.status_led,
        }
    }
}

impl<I: InputPin, O: OutputPin> DigitalIo for PinBoard<I, O> {
    fn read(&mut self, line: InputLine) -> bool {
        self.inputs[line.index()].is_high()
    }

    fn write(&mut self, line: OutputLine, high: bool) {
        match line {
            OutputLine::Anode(slot) => self.anodes[slot.index()].set_state(high),
            OutputLine::Segment(bit) => {
                if let Some(pin) = self.segments.get_mut(usize::from(bit)) {
                    pin.set_state(high);
                }
            }
            OutputLine::StatusLed => self.status_led.set_state(high),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use pinlock_core::display::Multiplexer;
    use pinlock_core::sim::SimClock;
    use pinlock_core::state::EMPTY;
    use pinlock_core::{Action, Keypad, KeypadConfig};

    /// Mock output pin for testing
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Mock input pin wired to a test-controlled level
    struct MockButton<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for MockButton<'_> {
        fn is_high(&mut self) -> bool {
            self.level.get()
        }
    }

    fn out() -> MockPin {
        MockPin { high: false }
    }

    fn board(levels: &[Cell<bool>; 5]) -> PinBoard<MockButton<'_>, MockPin> {
        PinBoard::new(BoardPins {
            advance: MockButton { level: &levels[0] },
            decrement: MockButton { level: &levels[1] },
            digit: MockButton { level: &levels[2] },
            clear: MockButton { level: &levels[3] },
            mode: MockButton { level: &levels[4] },
            anodes: [out(), out(), out(), out()],
            segments: [out(), out(), out(), out(), out(), out(), out(), out()],
            status_led: MockPin { high: true },
        })
    }

    fn levels() -> [Cell<bool>; 5] {
        [
            Cell::new(false),
            Cell::new(false),
            Cell::new(false),
            Cell::new(false),
            Cell::new(false),
        ]
    }

    #[test]
    fn test_new_parks_outputs() {
        let levels = levels();
        let board = board(&levels);
        for slot in Slot::ALL {
            assert!(board.anode_is_high(slot));
        }
        assert_eq!(board.segment_pattern(), 0xFF);
        assert!(!board.status_led.is_set_high());
    }

    #[test]
    fn test_reads_map_to_pins() {
        let levels = levels();
        let mut board = board(&levels);
        for line in InputLine::ALL {
            levels[line.index()].set(true);
            for other in InputLine::ALL {
                assert_eq!(board.read(other), other == line);
            }
            levels[line.index()].set(false);
        }
    }

    #[test]
    fn test_multiplexer_drives_anode_pins() {
        let levels = levels();
        let mut board = board(&levels);

        Multiplexer::new(&mut board).activate(Slot::S2);
        assert!(board.anode_is_high(Slot::S0));
        assert!(board.anode_is_high(Slot::S1));
        assert!(!board.anode_is_high(Slot::S2));
        assert!(board.anode_is_high(Slot::S3));

        Multiplexer::new(&mut board).write_segments(0x92);
        assert_eq!(board.segment_pattern(), 0x92);
    }

    #[test]
    fn test_out_of_range_segment_bit_is_ignored() {
        let levels = levels();
        let mut board = board(&levels);
        board.write(OutputLine::Segment(8), false);
        assert_eq!(board.segment_pattern(), 0xFF);
    }

    #[test]
    fn test_keypad_runs_on_pin_board() {
        let levels = levels();
        let now = Cell::new(0);
        let mut keypad =
            Keypad::new(board(&levels), SimClock::new(&now), &KeypadConfig::DEFAULT).unwrap();

        levels[InputLine::Digit.index()].set(true);
        assert_eq!(keypad.step().action, Some(Action::IncrementCell));
        assert_eq!(keypad.state().buffer[0], 0);
        levels[InputLine::Digit.index()].set(false);
        keypad.step();

        levels[InputLine::Advance.index()].set(true);
        assert_eq!(keypad.step().action, Some(Action::Shift));
        assert_eq!(&keypad.state().buffer[..2], &[EMPTY, 0]);

        levels[InputLine::Mode.index()].set(true);
        keypad.step();
        assert!(keypad.io().status_led.is_set_high());

        let pins = keypad.into_parts().0.release();
        assert!(pins.anodes.iter().all(|pin| pin.is_set_high()));
    }
}
